use crate::error::{ResolutionError, Result};

/// What the remote visitor wants to subscribe to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalTarget {
    User(String),
    Group(String),
    List { tagger: String, name: String },
}

fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

impl LocalTarget {
    /// Build a target from the subscribe form's fields.
    ///
    /// A nickname wins over a group, which wins over a list; a list needs
    /// both the tagger and the list name. Blank fields count as absent.
    pub fn from_fields(
        nickname: Option<&str>,
        group: Option<&str>,
        tagger: Option<&str>,
        peopletag: Option<&str>,
    ) -> Result<Self> {
        if let Some(nickname) = present(nickname) {
            return Ok(LocalTarget::User(nickname.to_string()));
        }
        if let Some(group) = present(group) {
            return Ok(LocalTarget::Group(group.to_string()));
        }
        match (present(tagger), present(peopletag)) {
            (Some(tagger), Some(name)) => Ok(LocalTarget::List {
                tagger: tagger.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ResolutionError::NoLocalTargetProvided),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_takes_precedence() {
        let target =
            LocalTarget::from_fields(Some("alice"), Some("devs"), Some("carol"), Some("friends"))
                .unwrap();
        assert_eq!(target, LocalTarget::User("alice".to_string()));
    }

    #[test]
    fn test_group() {
        let target = LocalTarget::from_fields(None, Some(" devs "), None, None).unwrap();
        assert_eq!(target, LocalTarget::Group("devs".to_string()));
    }

    #[test]
    fn test_list_needs_both_fields() {
        let target =
            LocalTarget::from_fields(Some(""), None, Some("carol"), Some("friends")).unwrap();
        assert_eq!(
            target,
            LocalTarget::List {
                tagger: "carol".to_string(),
                name: "friends".to_string()
            }
        );

        let err = LocalTarget::from_fields(None, None, Some("carol"), None).unwrap_err();
        assert!(matches!(err, ResolutionError::NoLocalTargetProvided));
    }

    #[test]
    fn test_nothing_provided() {
        let err = LocalTarget::from_fields(Some("  "), Some(""), None, None).unwrap_err();
        assert!(matches!(err, ResolutionError::NoLocalTargetProvided));
    }
}
