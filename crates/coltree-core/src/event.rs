//! Event scripts as standalone `event.<listen>.js` files

use crate::meta::{EventMeta, sort_by_order};
use crate::model::{DEFAULT_SCRIPT_TYPE, Event, Script};
use crate::{Error, Result};
use coltree_fs::io;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static EVENT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^event\.([^./\\]+)\.js$").expect("valid event file pattern"));

/// File name holding the script of a `listen` trigger.
pub fn event_file_name(listen: &str) -> Result<String> {
    let name = format!("event.{listen}.js");
    if !EVENT_FILE.is_match(&name) || listen.contains('\0') {
        return Err(Error::InvalidEventName {
            listen: listen.to_string(),
        });
    }
    Ok(name)
}

/// Trigger encoded in an event file name, if `name` is one.
pub fn parse_event_file_name(name: &str) -> Option<&str> {
    EVENT_FILE
        .captures(name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Write one file per event plus the `.event.meta.json` recording their order.
///
/// Script lines are joined with `\n` without a trailing newline.
pub fn write_events(dir: &Path, events: &[Event]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut event_order = Vec::with_capacity(events.len());

    for event in events {
        let file_name = event_file_name(&event.listen)?;
        if !seen.insert(file_name.clone()) {
            return Err(Error::DuplicateEvent {
                listen: event.listen.clone(),
                path: dir.to_path_buf(),
            });
        }

        io::write_text(&dir.join(&file_name), &event.script.exec.join("\n"))?;
        event_order.push(file_name);
    }

    EventMeta { event_order }.save(dir)
}

/// Rebuild an event from its file.
pub fn read_event(path: &Path, listen: &str) -> Result<Event> {
    let content = io::read_text(path)?;
    let exec = content.split('\n').map(str::to_string).collect();

    Ok(Event {
        listen: listen.to_string(),
        script: Script {
            exec,
            kind: DEFAULT_SCRIPT_TYPE.to_string(),
        },
    })
}

/// Put events back into the order recorded in `dir`'s `.event.meta.json`.
pub fn order_events(dir: &Path, events: &mut [Event]) -> Result<()> {
    let meta = EventMeta::load_required(dir)?;
    let mut keyed: Vec<(String, Event)> = events
        .iter()
        .map(|e| (format!("event.{}.js", e.listen), e.clone()))
        .collect();

    sort_by_order(&mut keyed, &meta.event_order, |(file, _)| file.as_str());

    for (slot, (_, event)) in events.iter_mut().zip(keyed) {
        *slot = event;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("prerequest")]
    #[case("test")]
    #[case("my-hook_2")]
    fn valid_triggers_round_trip_through_file_name(#[case] listen: &str) {
        let name = event_file_name(listen).unwrap();
        assert_eq!(parse_event_file_name(&name), Some(listen));
    }

    #[rstest]
    #[case("")]
    #[case("pre.request")]
    #[case("a/b")]
    #[case(r"a\b")]
    fn invalid_triggers_are_rejected(#[case] listen: &str) {
        assert!(matches!(
            event_file_name(listen),
            Err(Error::InvalidEventName { .. })
        ));
    }

    #[test]
    fn non_event_files_do_not_parse() {
        assert_eq!(parse_event_file_name("request.json"), None);
        assert_eq!(parse_event_file_name(".event.meta.json"), None);
        assert_eq!(parse_event_file_name("event.test.js.bak"), None);
    }

    #[test]
    fn script_has_no_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let events = vec![Event::new("test", &["pm.test('ok');", "// done"])];

        write_events(temp.path(), &events).unwrap();

        let content = std::fs::read_to_string(temp.path().join("event.test.js")).unwrap();
        assert_eq!(content, "pm.test('ok');\n// done");

        let back = read_event(&temp.path().join("event.test.js"), "test").unwrap();
        assert_eq!(back, events[0]);
    }

    #[test]
    fn blank_script_keeps_its_single_line() {
        let temp = TempDir::new().unwrap();
        let events = vec![Event::new("test", &[""])];
        write_events(temp.path(), &events).unwrap();

        let content = std::fs::read_to_string(temp.path().join("event.test.js")).unwrap();
        assert_eq!(content, "");

        let back = read_event(&temp.path().join("event.test.js"), "test").unwrap();
        assert_eq!(back.script.exec, vec![String::new()]);
        assert_eq!(back, events[0]);
    }

    #[test]
    fn duplicate_triggers_are_rejected() {
        let temp = TempDir::new().unwrap();
        let events = vec![Event::new("test", &["a"]), Event::new("test", &["b"])];

        assert!(matches!(
            write_events(temp.path(), &events),
            Err(Error::DuplicateEvent { .. })
        ));
    }

    #[test]
    fn events_are_reordered_from_meta() {
        let temp = TempDir::new().unwrap();
        let written = vec![Event::new("test", &["t"]), Event::new("prerequest", &["p"])];
        write_events(temp.path(), &written).unwrap();

        let mut read = vec![
            read_event(&temp.path().join("event.prerequest.js"), "prerequest").unwrap(),
            read_event(&temp.path().join("event.test.js"), "test").unwrap(),
        ];
        order_events(temp.path(), &mut read).unwrap();

        assert_eq!(read, written);
    }
}
