//! Collection documents as plain JSON.
//!
//! Fixtures are [`serde_json::Value`]s so this crate does not depend on the
//! codec it helps test. Deserialize them with the model types at the call
//! site.

use serde_json::{Value, json};

/// Collection `Suite` whose only item is the JSON request `Login`.
pub fn login_request() -> Value {
    json!({
        "info": { "name": "Suite" },
        "item": [
            {
                "name": "Login",
                "request": {
                    "method": "POST",
                    "header": [
                        { "key": "Content-Type", "value": "application/json" }
                    ],
                    "body": { "raw": "{\"u\":1}" }
                }
            }
        ]
    })
}

/// One folder `Login` with a single JSON request, inside collection `Suite`.
pub fn suite_login() -> Value {
    json!({
        "info": { "name": "Suite" },
        "item": [
            {
                "name": "Login",
                "item": [
                    {
                        "name": "POST login",
                        "request": {
                            "method": "POST",
                            "url": "https://api.example.test/login",
                            "header": [
                                { "key": "Content-Type", "value": "application/json" }
                            ],
                            "body": { "mode": "raw", "raw": "{\"u\":1}" }
                        }
                    }
                ]
            }
        ]
    })
}

/// A collection that touches every part of the layout: hoisted root
/// sidecars, root and nested events, a saved response, a folder
/// description and an empty folder.
pub fn full_collection() -> Value {
    json!({
        "info": {
            "name": "Store API",
            "_postman_id": "6b0e2a52-0000-4000-8000-000000000000",
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        },
        "auth": {
            "type": "bearer",
            "bearer": [{ "key": "token", "value": "{{token}}", "type": "string" }]
        },
        "variable": [
            { "key": "base", "value": "https://store.example.test" }
        ],
        "event": [
            {
                "listen": "prerequest",
                "script": { "type": "text/javascript", "exec": ["console.log('root');"] }
            }
        ],
        "item": [
            {
                "name": "Orders",
                "description": "Order lifecycle",
                "event": [
                    {
                        "listen": "test",
                        "script": {
                            "type": "text/javascript",
                            "exec": ["pm.test('ok', function () {", "  pm.response.to.be.ok;", "});"]
                        }
                    },
                    {
                        "listen": "prerequest",
                        "script": { "type": "text/javascript", "exec": ["pm.variables.set('n', 1);"] }
                    }
                ],
                "item": [
                    {
                        "name": "Create order",
                        "request": {
                            "method": "POST",
                            "url": "{{base}}/orders",
                            "header": [
                                { "key": "content-type", "value": "application/json; charset=utf-8" }
                            ],
                            "body": { "mode": "raw", "raw": "{\"sku\":\"A-1\",\"qty\":2}" }
                        },
                        "response": [
                            { "name": "Created", "code": 201, "body": "{\"id\":7}" }
                        ]
                    },
                    {
                        "name": "List orders",
                        "request": { "method": "GET", "url": "{{base}}/orders" }
                    }
                ]
            },
            {
                "name": "Health",
                "request": { "method": "GET", "url": "{{base}}/health" },
                "event": [
                    {
                        "listen": "test",
                        "script": { "type": "text/javascript", "exec": [""] }
                    }
                ]
            },
            {
                "name": "Empty",
                "item": []
            }
        ]
    })
}

/// Siblings whose names collide once written to disk.
pub fn colliding_names() -> Value {
    json!({
        "info": { "name": "Collide" },
        "item": [
            { "name": "A", "item": [] },
            { "name": "A", "item": [] },
            { "name": "A", "item": [] },
            { "name": "a/b", "request": { "method": "GET", "url": "/x" } },
            { "name": "a_slash_b", "request": { "method": "GET", "url": "/y" } }
        ]
    })
}
