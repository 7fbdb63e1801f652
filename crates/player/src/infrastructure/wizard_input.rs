//! Line commands for the interactive `wizard` mode.
//!
//! Each stdin line parses into one [`WizardCommand`], which is applied to the
//! session. Commands mirror the form interactions: dot clicks, priority
//! selects, qualifier inputs and bio fields (typing then leaving the field).

use codex_domain::{
    BioField, Category, DomainError, PriorityLevel, PriorityTable, Qualifier, TraitKind,
};

use crate::application::{SessionError, WizardSession};

pub const HELP: &str = "Commands:
  set <kind> <name> <value>               Set a rating
  toggle <kind> <name> <value>            Click a dot (clicking the current value clears it)
  note <kind> <instance|specialty> <name>: <text>
  priority <attributes|skills> <level> <category|none>
  bio <field> <text>                      Set a bio field (e.g. bio full_name Sofia Reyes)
  review | save | submit | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    Set {
        kind: TraitKind,
        name: String,
        value: u8,
    },
    Toggle {
        kind: TraitKind,
        name: String,
        value: u8,
    },
    Note {
        kind: TraitKind,
        qualifier: Qualifier,
        name: String,
        text: String,
    },
    Priority {
        table: PriorityTable,
        level: PriorityLevel,
        category: Option<Category>,
    },
    Bio {
        field: BioField,
        value: String,
    },
    Review,
    Save,
    Submit,
    Help,
    Quit,
}

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue,
    Print(String),
    Quit,
    Submitted,
}

fn usage(command: &str) -> DomainError {
    DomainError::parse(format!("Malformed `{}` command; type `help`", command))
}

/// Split `<name...> <value>` where the name may contain spaces.
fn name_and_value(rest: &str, command: &str) -> Result<(String, u8), DomainError> {
    let (name, value) = rest.trim().rsplit_once(' ').ok_or_else(|| usage(command))?;
    let value = value
        .parse()
        .map_err(|_| DomainError::parse(format!("Not a rating: {}", value)))?;
    Ok((name.trim().to_string(), value))
}

impl WizardCommand {
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "set" | "toggle" => {
                let (kind, rest) = rest.split_once(' ').ok_or_else(|| usage(verb))?;
                let kind: TraitKind = kind.parse()?;
                let (name, value) = name_and_value(rest, verb)?;
                if verb.eq_ignore_ascii_case("set") {
                    Ok(Self::Set { kind, name, value })
                } else {
                    Ok(Self::Toggle { kind, name, value })
                }
            }
            "note" => {
                let mut parts = rest.splitn(3, ' ');
                let (Some(kind), Some(qualifier), Some(tail)) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(usage(verb));
                };
                let qualifier = match qualifier.to_ascii_lowercase().as_str() {
                    "instance" => Qualifier::Instance,
                    "specialty" => Qualifier::Specialty,
                    other => {
                        return Err(DomainError::parse(format!("Unknown qualifier: {}", other)))
                    }
                };
                let (name, text) = tail.split_once(':').ok_or_else(|| usage(verb))?;
                Ok(Self::Note {
                    kind: kind.parse()?,
                    qualifier,
                    name: name.trim().to_string(),
                    text: text.trim().to_string(),
                })
            }
            "priority" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                let [table, level, category] = parts.as_slice() else {
                    return Err(usage(verb));
                };
                let table = match table.to_ascii_lowercase().as_str() {
                    "attributes" => PriorityTable::Attributes,
                    "skills" => PriorityTable::Skills,
                    other => return Err(DomainError::parse(format!("Unknown table: {}", other))),
                };
                let category = if category.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(category.parse()?)
                };
                Ok(Self::Priority {
                    table,
                    level: level.parse()?,
                    category,
                })
            }
            "bio" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(usage(verb));
                }
                Ok(Self::Bio {
                    field: field.parse()?,
                    value: value.trim().to_string(),
                })
            }
            "review" => Ok(Self::Review),
            "save" => Ok(Self::Save),
            "submit" => Ok(Self::Submit),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(DomainError::parse(format!("Unknown command: {}", other))),
        }
    }
}

/// Apply one command to the session.
///
/// Rejected edits and failed submissions come back as errors; the session's
/// render sink has already reported them where that applies.
pub async fn apply(
    session: &mut WizardSession,
    command: WizardCommand,
) -> Result<Reply, SessionError> {
    match command {
        WizardCommand::Set { kind, name, value } => {
            session.set_trait(kind, &name, value)?;
        }
        WizardCommand::Toggle { kind, name, value } => {
            session.toggle_trait(kind, &name, value)?;
        }
        WizardCommand::Note {
            kind,
            qualifier,
            name,
            text,
        } => {
            session.set_qualifier(kind, &name, qualifier, &text)?;
        }
        WizardCommand::Priority {
            table,
            level,
            category,
        } => {
            session.assign_priority(table, level, category);
        }
        WizardCommand::Bio { field, value } => {
            session.set_bio(field, value);
            session.on_field_blur(field);
        }
        WizardCommand::Review => return Ok(Reply::Print(session.review().to_string())),
        WizardCommand::Save => {
            let message = if session.save_draft() {
                "Draft saved"
            } else {
                "Draft could not be saved"
            };
            return Ok(Reply::Print(message.to_string()));
        }
        WizardCommand::Submit => {
            session.submit().await?;
            return Ok(Reply::Submitted);
        }
        WizardCommand::Help => return Ok(Reply::Print(HELP.to_string())),
        WizardCommand::Quit => return Ok(Reply::Quit),
    }
    Ok(Reply::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DraftService;
    use crate::ports::outbound::{
        MockApprovalApiPort, MockClockPort, MockRenderSink, MockStoragePort,
    };
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn session(storage: MockStoragePort) -> WizardSession {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2026, 9, 1, 20, 0, 0).unwrap());
        let mut render = MockRenderSink::new();
        render.expect_render_validation().returning(|_| ());
        render.expect_render_pools().returning(|_| ());
        render.expect_render_completion().returning(|_| ());
        render.expect_notify().returning(|_| ());
        WizardSession::new(
            Arc::new(MockApprovalApiPort::new()),
            Arc::new(render),
            DraftService::new(Arc::new(storage), Arc::new(clock)),
        )
    }

    #[test]
    fn ratings_accept_multi_word_names() {
        assert_eq!(
            WizardCommand::parse("set advantage Mawla Network 2").unwrap(),
            WizardCommand::Set {
                kind: TraitKind::Advantage,
                name: "Mawla Network".to_string(),
                value: 2,
            }
        );
        assert_eq!(
            WizardCommand::parse("toggle attribute wits 3").unwrap(),
            WizardCommand::Toggle {
                kind: TraitKind::Attribute,
                name: "wits".to_string(),
                value: 3,
            }
        );
    }

    #[test]
    fn notes_split_name_from_text() {
        assert_eq!(
            WizardCommand::parse("note advantage instance Contacts: Harbor police").unwrap(),
            WizardCommand::Note {
                kind: TraitKind::Advantage,
                qualifier: Qualifier::Instance,
                name: "Contacts".to_string(),
                text: "Harbor police".to_string(),
            }
        );
    }

    #[test]
    fn priorities_can_be_cleared() {
        assert_eq!(
            WizardCommand::parse("priority skills secondary none").unwrap(),
            WizardCommand::Priority {
                table: PriorityTable::Skills,
                level: PriorityLevel::Secondary,
                category: None,
            }
        );
        assert!(WizardCommand::parse("priority skills secondary").is_err());
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(WizardCommand::parse("set skill brawl lots").is_err());
        assert!(WizardCommand::parse("bio nickname Red").is_err());
        assert!(WizardCommand::parse("dance").is_err());
        assert_eq!(WizardCommand::parse(" QUIT ").unwrap(), WizardCommand::Quit);
    }

    #[tokio::test]
    async fn bio_commands_save_the_draft_like_a_blur() {
        let mut storage = MockStoragePort::new();
        storage
            .expect_save()
            .with(eq("chargen_draft_new"), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Ok(()));
        let mut session = session(storage);

        let reply = apply(
            &mut session,
            WizardCommand::parse("bio full_name Sofia Reyes").unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(reply, Reply::Continue);
        assert_eq!(session.build().bio().full_name, "Sofia Reyes");
    }

    #[tokio::test]
    async fn clan_selection_does_not_save() {
        let mut storage = MockStoragePort::new();
        storage.expect_save().never();
        let mut session = session(storage);

        apply(&mut session, WizardCommand::parse("bio clan Brujah").unwrap())
            .await
            .unwrap();

        assert_eq!(session.build().clan().map(|c| c.name), Some("Brujah"));
    }

    #[tokio::test]
    async fn rating_commands_reach_the_ledger() {
        let mut session = session(MockStoragePort::new());

        apply(&mut session, WizardCommand::parse("set skill brawl 3").unwrap())
            .await
            .unwrap();
        apply(&mut session, WizardCommand::parse("toggle skill brawl 3").unwrap())
            .await
            .unwrap();

        assert_eq!(
            session.build().ledger().rating(TraitKind::Skill, "brawl"),
            Ok(0)
        );
    }

    #[tokio::test]
    async fn unknown_traits_are_errors() {
        let mut session = session(MockStoragePort::new());
        let result = apply(&mut session, WizardCommand::parse("set skill juggling 2").unwrap()).await;
        assert!(matches!(result, Err(SessionError::Domain(_))));
    }

    #[tokio::test]
    async fn invalid_build_submit_is_blocked() {
        let mut session = session(MockStoragePort::new());
        let result = apply(&mut session, WizardCommand::Submit).await;
        assert!(matches!(result, Err(SessionError::Blocked { .. })));
    }
}
