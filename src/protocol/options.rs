use super::CommandError;

/// Runtime options for the text protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolOptions {
    /// Print the board after every accepted move
    pub show_board: bool,
    /// Append `check` to a move reply when the side now to move is in check
    pub announce_check: bool,
}

impl Default for ProtocolOptions {
    fn default() -> Self {
        ProtocolOptions {
            show_board: false,
            announce_check: true,
        }
    }
}

impl ProtocolOptions {
    /// One `option <Name> <value>` line per option.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("option ShowBoard {}", self.show_board),
            format!("option AnnounceCheck {}", self.announce_check),
        ]
    }

    /// Apply `setoption name <Name> value <value>` arguments.
    pub fn apply_setoption(&mut self, args: &[String]) -> Result<(), CommandError> {
        let (name, value) = parse_setoption(args).ok_or(CommandError::MissingArgument {
            command: "setoption",
            argument: "name",
        })?;
        let value = value.ok_or(CommandError::MissingArgument {
            command: "setoption",
            argument: "value",
        })?;

        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        let target = match normalized.as_str() {
            "showboard" => &mut self.show_board,
            "announcecheck" => &mut self.announce_check,
            _ => return Err(CommandError::UnknownOption { name }),
        };
        *target = parse_bool(&value).ok_or(CommandError::InvalidOptionValue { name, value })?;
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Split `name <words...> value <words...>` into its two parts.
fn parse_setoption(args: &[String]) -> Option<(String, Option<String>)> {
    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in args {
        match part.as_str() {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_defaults() {
        let options = ProtocolOptions::default();
        assert!(!options.show_board);
        assert!(options.announce_check);
        assert_eq!(
            options.lines(),
            vec!["option ShowBoard false", "option AnnounceCheck true"]
        );
    }

    #[test]
    fn test_setoption_names_are_loose() {
        let mut options = ProtocolOptions::default();
        options
            .apply_setoption(&args("name Show Board value on"))
            .unwrap();
        assert!(options.show_board);
        options
            .apply_setoption(&args("name announcecheck value 0"))
            .unwrap();
        assert!(!options.announce_check);
    }

    #[test]
    fn test_setoption_errors() {
        let mut options = ProtocolOptions::default();
        assert_eq!(
            options.apply_setoption(&args("value true")),
            Err(CommandError::MissingArgument {
                command: "setoption",
                argument: "name"
            })
        );
        assert_eq!(
            options.apply_setoption(&args("name ShowBoard")),
            Err(CommandError::MissingArgument {
                command: "setoption",
                argument: "value"
            })
        );
        assert_eq!(
            options.apply_setoption(&args("name Hash value 16")),
            Err(CommandError::UnknownOption {
                name: "Hash".to_string()
            })
        );
        assert_eq!(
            options.apply_setoption(&args("name ShowBoard value maybe")),
            Err(CommandError::InvalidOptionValue {
                name: "ShowBoard".to_string(),
                value: "maybe".to_string()
            })
        );
        assert_eq!(options, ProtocolOptions::default());
    }
}
