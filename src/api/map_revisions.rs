use crate::domain::{Revisions, ThermostatRevision};
use std::collections::HashMap;

/// Parses `identifier:name:connected:thermostatRev:alertsRev:runtimeRev:intervalRev` entries,
/// keyed by identifier. Segments are read by position, a missing segment becomes an empty string.
pub fn map_revisions(revision_list: &[String]) -> HashMap<String, ThermostatRevision> {
    revision_list
        .iter()
        .map(|revision| {
            let mut parts = revision.split(':');
            let mut next = || parts.next().unwrap_or_default().to_string();

            let identifier = next();
            let name = next();
            let connected = next();
            let revisions = Revisions {
                thermostat: next(),
                alerts: next(),
                runtime: next(),
                internal: next(),
            };

            (identifier, ThermostatRevision { name, connected, revisions })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_revisions_by_identifier() {
        let revisions = vec![
            "101010101010:HOME:true:190612095739:190611182126:190612142336:190612141500".to_string(),
            "202020202020:Office:false:190611180138:190611121914:190612141723:190612141000".to_string(),
        ];

        let result = map_revisions(&revisions);

        assert_eq!(result.len(), 2);
        assert_eq!(
            result["101010101010"],
            ThermostatRevision {
                name: "HOME".to_string(),
                connected: "true".to_string(),
                revisions: Revisions {
                    thermostat: "190612095739".to_string(),
                    alerts: "190611182126".to_string(),
                    runtime: "190612142336".to_string(),
                    internal: "190612141500".to_string(),
                },
            }
        );
        assert!(result["101010101010"].is_connected());
        assert!(!result["202020202020"].is_connected());
    }

    #[test]
    fn maps_an_empty_list() {
        assert!(map_revisions(&[]).is_empty());
    }

    #[test]
    fn keeps_an_unexpected_connected_flag_verbatim() {
        let revisions = vec![
            "101010101010:HOME:true:190612095739:190611182126:190612142336:190612141500".to_string(),
            "202020202020:Office:1:a:b:c:d".to_string(),
        ];

        let result = map_revisions(&revisions);

        assert_eq!(result.len(), 2);
        assert_eq!(result["101010101010"].name, "HOME");
        assert_eq!(result["202020202020"].connected, "1");
        assert!(!result["202020202020"].is_connected());
        assert_eq!(result["202020202020"].revisions.internal, "d");
    }

    #[test]
    fn reads_short_entries_by_position() {
        let result = map_revisions(&["101010101010:HOME:true:190612095739".to_string()]);

        let revision = &result["101010101010"];
        assert_eq!(revision.revisions.thermostat, "190612095739");
        assert_eq!(revision.revisions.alerts, "");
        assert_eq!(revision.revisions.internal, "");
    }

    #[test]
    fn ignores_trailing_segments() {
        let result = map_revisions(&["101010101010:HOME:true:1:2:3:4:extra".to_string()]);

        assert_eq!(result["101010101010"].revisions.internal, "4");
    }
}
