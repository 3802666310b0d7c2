pub use error::CommandError;

mod error;

/// One line of a script. Arguments borrow from the script text.
///
/// ```text
/// # comment
/// profile <username> <full name...> [--image <url>]
/// friend <a> <b>
/// search <a> <b>
/// friends <username>
/// mutual <a> <b>
/// image <username> [url]
/// view <username>
/// friendships
/// stats
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command<'a> {
    Profile {
        username: &'a str,
        name: &'a str,
        image: Option<&'a str>,
    },
    Friend { a: &'a str, b: &'a str },
    Search { a: &'a str, b: &'a str },
    Friends { username: &'a str },
    Mutual { a: &'a str, b: &'a str },
    Image { username: &'a str, url: Option<&'a str> },
    View { username: &'a str },
    Friendships,
    Stats,
}

impl<'a> Command<'a> {
    /// Parses a single line. Blank lines and `#` comments yield `None`.
    ///
    /// `line` is the 1-based line number used in errors.
    pub fn parse(line: usize, text: &'a str) -> Result<Option<Self>, CommandError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }
        let (keyword, rest) = split_token(text);
        let mut args = Args {
            line,
            command: "",
            rest,
        };
        let command = match keyword {
            "profile" => {
                args.command = "profile";
                let username = args.required("username")?;
                let name = args.remainder_until("name", IMAGE_FLAG)?;
                let image = args.flag(IMAGE_FLAG, "url")?;
                Command::Profile {
                    username,
                    name,
                    image,
                }
            }
            "friend" => {
                args.command = "friend";
                let (a, b) = args.pair()?;
                Command::Friend { a, b }
            }
            "search" => {
                args.command = "search";
                let (a, b) = args.pair()?;
                Command::Search { a, b }
            }
            "mutual" => {
                args.command = "mutual";
                let (a, b) = args.pair()?;
                Command::Mutual { a, b }
            }
            "friends" => {
                args.command = "friends";
                let username = args.required("username")?;
                Command::Friends { username }
            }
            "image" => {
                args.command = "image";
                let username = args.required("username")?;
                let url = args.optional();
                Command::Image { username, url }
            }
            "view" => {
                args.command = "view";
                let username = args.required("username")?;
                Command::View { username }
            }
            "friendships" => {
                args.command = "friendships";
                Command::Friendships
            }
            "stats" => {
                args.command = "stats";
                Command::Stats
            }
            _ => {
                return Err(CommandError::UnknownCommand {
                    line,
                    command: keyword.to_string(),
                })
            }
        };
        args.finish()?;
        Ok(Some(command))
    }
}

const IMAGE_FLAG: &str = "--image";

/// Parses every line of `script`, skipping blanks and comments.
pub fn parse_script(
    script: &str,
) -> impl Iterator<Item = Result<(usize, Command<'_>), CommandError>> + '_ {
    script.lines().enumerate().filter_map(|(i, text)| {
        let line = i + 1;
        Command::parse(line, text)
            .map(|command| command.map(|command| (line, command)))
            .transpose()
    })
}

struct Args<'a> {
    line: usize,
    command: &'static str,
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn optional(&mut self) -> Option<&'a str> {
        let (token, rest) = split_token(self.rest);
        self.rest = rest;
        (!token.is_empty()).then_some(token)
    }

    fn required(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.optional().ok_or(CommandError::MissingArgument {
            line: self.line,
            command: self.command,
            argument,
        })
    }

    fn pair(&mut self) -> Result<(&'a str, &'a str), CommandError> {
        Ok((self.required("a")?, self.required("b")?))
    }

    /// Everything up to the `flag` token (or the end of the line), with inner whitespace kept.
    fn remainder_until(
        &mut self,
        argument: &'static str,
        flag: &str,
    ) -> Result<&'a str, CommandError> {
        let rest = self.rest;
        let end = rest
            .match_indices(flag)
            .map(|(i, _)| i)
            .find(|i| {
                let before = rest[..*i].ends_with(char::is_whitespace);
                let after = rest[*i + flag.len()..]
                    .chars()
                    .next()
                    .map_or(true, char::is_whitespace);
                before && after
            })
            .unwrap_or(rest.len());
        let value = rest[..end].trim();
        self.rest = &rest[end..];
        if value.is_empty() {
            return Err(CommandError::MissingArgument {
                line: self.line,
                command: self.command,
                argument,
            });
        }
        Ok(value)
    }

    /// `flag <value>` if `flag` is the next token.
    fn flag(
        &mut self,
        flag: &str,
        argument: &'static str,
    ) -> Result<Option<&'a str>, CommandError> {
        let (token, rest) = split_token(self.rest);
        if token != flag {
            return Ok(None);
        }
        self.rest = rest;
        self.required(argument).map(Some)
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.optional() {
            None => Ok(()),
            Some(argument) => Err(CommandError::UnexpectedArgument {
                line: self.line,
                command: self.command,
                argument: argument.to_string(),
            }),
        }
    }
}

fn split_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], &text[end..]),
        None => (text, ""),
    }
}
