use serde::{Deserialize, Serialize};

/// One supervisor record as the upstream directory returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervisor {
    pub jurisdiction: String,
    pub last_name: String,
    pub first_name: String,
}

impl Supervisor {
    /// The display string served to clients.
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}, {}",
            self.jurisdiction, self.last_name, self.first_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_field_names() {
        let records: Vec<Supervisor> = serde_json::from_str(
            r#"[{"jurisdiction": "A", "lastName": "Jones", "firstName": "Z"}]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![Supervisor {
                jurisdiction: "A".to_string(),
                last_name: "Jones".to_string(),
                first_name: "Z".to_string(),
            }]
        );
    }

    #[test]
    fn display_name_format() {
        let supervisor = Supervisor {
            jurisdiction: "B".to_string(),
            last_name: "Smith".to_string(),
            first_name: "A".to_string(),
        };
        assert_eq!(supervisor.display_name(), "B - Smith, A");
    }
}
