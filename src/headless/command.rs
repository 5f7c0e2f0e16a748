//! Headless line commands

use std::str::FromStr;

use formvoid_app::Message;
use formvoid_core::prelude::*;
use formvoid_core::CategoryFilter;

/// One stdin line, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Select { id: String },
    Back,
    About,
    Category(CategoryFilter),
    Context { condition: String, need: String },
    Toggle,
    Reset,
    Share,
    /// Print the current listing
    Plan,
    Quit,
}

impl HeadlessCommand {
    /// The message this command feeds to the update function
    ///
    /// `Plan` only reads state and has no message.
    pub fn to_message(&self) -> Option<Message> {
        let msg = match self {
            HeadlessCommand::Select { id } => Message::SelectRecord { id: id.clone() },
            HeadlessCommand::Back => Message::Back,
            HeadlessCommand::About => Message::OpenAbout,
            HeadlessCommand::Category(filter) => Message::ChooseCategory(*filter),
            HeadlessCommand::Context { condition, need } => Message::ChooseContext {
                condition: condition.clone(),
                need: need.clone(),
            },
            HeadlessCommand::Toggle => Message::ToggleDisplayMode,
            HeadlessCommand::Reset => Message::Reset,
            HeadlessCommand::Share => Message::ShareSelected,
            HeadlessCommand::Plan => return None,
            HeadlessCommand::Quit => Message::Quit,
        };
        Some(msg)
    }
}

fn expect_args<'a>(verb: &str, args: &'a [&'a str], count: usize) -> Result<&'a [&'a str]> {
    if args.len() == count {
        Ok(args)
    } else {
        Err(Error::command(format!(
            "'{verb}' takes {count} argument(s), got {}",
            args.len()
        )))
    }
}

impl FromStr for HeadlessCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(Error::command("empty command"));
        };
        let args: Vec<&str> = words.collect();
        let verb_lower = verb.to_ascii_lowercase();

        let command = match verb_lower.as_str() {
            "select" | "open" => {
                let args = expect_args(verb, &args, 1)?;
                HeadlessCommand::Select {
                    id: args[0].to_string(),
                }
            }
            "category" => {
                let args = expect_args(verb, &args, 1)?;
                HeadlessCommand::Category(args[0].parse()?)
            }
            "context" => {
                let args = expect_args(verb, &args, 2)?;
                HeadlessCommand::Context {
                    condition: args[0].to_string(),
                    need: args[1].to_string(),
                }
            }
            bare => {
                let command = match bare {
                    "back" => HeadlessCommand::Back,
                    "about" => HeadlessCommand::About,
                    "toggle" => HeadlessCommand::Toggle,
                    "reset" => HeadlessCommand::Reset,
                    "share" => HeadlessCommand::Share,
                    "plan" => HeadlessCommand::Plan,
                    "quit" | "exit" => HeadlessCommand::Quit,
                    _ => return Err(Error::command(format!("unknown command '{verb}'"))),
                };
                expect_args(verb, &args, 0)?;
                command
            }
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formvoid_core::Category;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "select 3".parse::<HeadlessCommand>().unwrap(),
            HeadlessCommand::Select { id: "3".into() }
        );
        assert_eq!(
            "  CATEGORY   blueprint ".parse::<HeadlessCommand>().unwrap(),
            HeadlessCommand::Category(CategoryFilter::Only(Category::Blueprint))
        );
        assert_eq!(
            "category all".parse::<HeadlessCommand>().unwrap(),
            HeadlessCommand::Category(CategoryFilter::All)
        );
        assert_eq!(
            "context anxious structure".parse::<HeadlessCommand>().unwrap(),
            HeadlessCommand::Context {
                condition: "anxious".into(),
                need: "structure".into(),
            }
        );
        assert_eq!("plan".parse::<HeadlessCommand>().unwrap(), HeadlessCommand::Plan);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<HeadlessCommand>(),
            Err(Error::Command { .. })
        ));
        assert!(matches!(
            "fly away".parse::<HeadlessCommand>(),
            Err(Error::Command { .. })
        ));
        assert!(matches!(
            "select".parse::<HeadlessCommand>(),
            Err(Error::Command { .. })
        ));
        for line in ["toggle foo", "back now", "reset all", "share 3", "plan grid", "quit now"] {
            assert!(
                matches!(line.parse::<HeadlessCommand>(), Err(Error::Command { .. })),
                "{line} should be rejected"
            );
        }
        assert!(matches!(
            "category poetry".parse::<HeadlessCommand>(),
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_plan_has_no_message() {
        assert_eq!(HeadlessCommand::Plan.to_message(), None);
        assert_eq!(HeadlessCommand::Toggle.to_message(), Some(Message::ToggleDisplayMode));
    }
}
