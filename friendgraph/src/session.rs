use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::{debug, info, warn};
use serde_json::json;

use crate::command::{parse_script, Command};
use crate::input::Input;
use crate::model::Profile;
use crate::output::Output;
use crate::{FriendGraph, GraphError};

/// How query results and errors are written to the [Output].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Format {
    /// Human readable sentences, one result per line or block.
    #[default]
    Text,

    /// One compact JSON document per line. Successful mutations write nothing.
    Json,
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
}

/// Runs command scripts against a [FriendGraph] it owns.
///
/// A failing line (bad syntax, unknown profile, ...) is reported to the output and the run
/// continues with the next line, unless [Session::fail_fast] is set.
pub struct Session {
    graph: FriendGraph,
    format: Format,
    fail_fast: bool,
}

enum Reply<'g> {
    Done(String),
    Friendship { a: String, b: String, friends: bool },
    Friends { username: String, friends: Vec<&'g Profile> },
    Mutual { a: String, b: String, friends: Vec<&'g Profile> },
    View {
        profile: &'g Profile,
        friend_count: usize,
        friends: Vec<&'g Profile>,
    },
    Friendships(Vec<(&'g Profile, &'g Profile)>),
    Stats { profiles: usize, friendships: usize, communities: usize },
}

impl Session {
    pub fn new(graph: FriendGraph) -> Self {
        Self {
            graph,
            format: Format::default(),
            fail_fast: false,
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Stop at the first failing line and return it as an error from [Session::run].
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn graph(&self) -> &FriendGraph {
        &self.graph
    }

    pub fn into_graph(self) -> FriendGraph {
        self.graph
    }

    pub fn run(&mut self, input: &mut dyn Input, output: &mut dyn Output) -> Result<Summary> {
        let (format, fail_fast) = (self.format, self.fail_fast);
        let script = input.read()?;
        info!("Running script ({} lines)...", script.lines().count());

        let mut summary = Summary::default();
        for parsed in parse_script(script) {
            let (line, error) = match parsed {
                Ok((line, command)) => {
                    debug!("line {}: {:?}", line, command);
                    summary.executed += 1;
                    match apply(&mut self.graph, command) {
                        Ok(reply) => {
                            write_reply(format, &reply, output)?;
                            continue;
                        }
                        Err(err) => (line, format!("line {}: {}", line, err)),
                    }
                }
                Err(err) => (err.line(), err.to_string()),
            };

            summary.failed += 1;
            warn!("{}", error);
            write_error(format, line, &error, output)?;
            if fail_fast {
                return Err(anyhow!("stopped at first failure: {}", error));
            }
        }

        info!(
            "Executed {} commands, {} failed.",
            summary.executed, summary.failed
        );
        Ok(summary)
    }
}

fn apply<'g>(graph: &'g mut FriendGraph, command: Command) -> Result<Reply<'g>, GraphError> {
    let reply = match command {
        Command::Profile {
            username,
            name,
            image,
        } => {
            let mut profile = Profile::new(username, name);
            if let Some(image) = image {
                profile = profile.with_image(image);
            }
            graph.add_profile(profile)?;
            Reply::Done(format!("Profile '{}' created.", username))
        }
        Command::Friend { a, b } => {
            graph.add_friend(a, b)?;
            Reply::Done(format!("{} and {} are now friends.", a, b))
        }
        Command::Image { username, url } => {
            graph.set_profile_image(username, url.map(str::to_string))?;
            match url {
                Some(_) => Reply::Done(format!("Profile image for '{}' updated.", username)),
                None => Reply::Done(format!("Profile image for '{}' cleared.", username)),
            }
        }
        Command::Search { a, b } => Reply::Friendship {
            a: a.to_string(),
            b: b.to_string(),
            friends: graph.search_friend(a, b)?,
        },
        Command::Friends { username } => Reply::Friends {
            username: username.to_string(),
            friends: graph.all_friends(username)?,
        },
        Command::Mutual { a, b } => Reply::Mutual {
            a: a.to_string(),
            b: b.to_string(),
            friends: graph.mutual_friends(a, b)?,
        },
        Command::View { username } => {
            let graph = &*graph;
            Reply::View {
                profile: graph
                    .profile(username)
                    .ok_or_else(|| GraphError::UnknownVertex(username.into()))?,
                friend_count: graph.friend_count(username)?,
                friends: graph.all_friends(username)?,
            }
        }
        Command::Friendships => Reply::Friendships(graph.friendships().collect()),
        Command::Stats => Reply::Stats {
            profiles: graph.len(),
            friendships: graph.friendship_count(),
            communities: graph.community_count(),
        },
    };
    Ok(reply)
}

fn write_reply(format: Format, reply: &Reply, o: &mut dyn Output) -> Result<()> {
    match format {
        Format::Text => write_text(reply, o),
        Format::Json => write_json(reply, o),
    }
}

fn write_text(reply: &Reply, o: &mut dyn Output) -> Result<()> {
    match reply {
        Reply::Done(message) => o.write_line(message),
        Reply::Friendship { a, b, friends } => {
            let verb = if *friends { "are" } else { "are not" };
            o.write_line(&format!("{} and {} {} friends.", a, b, verb))
        }
        Reply::Friends { username, friends } => {
            if friends.is_empty() {
                return o.write_line(&format!("{} has no friends.", username));
            }
            o.write_line(&format!("Friends of {}:", username))?;
            write_profile_list(friends, o)
        }
        Reply::Mutual { a, b, friends } => {
            if friends.is_empty() {
                return o.write_line(&format!("{} and {} have no mutual friends.", a, b));
            }
            o.write_line(&format!("Mutual friends of {} and {}:", a, b))?;
            write_profile_list(friends, o)
        }
        Reply::View {
            profile,
            friend_count,
            friends,
        } => {
            o.write_line(&format!("Username: {}", profile.username()))?;
            o.write_line(&format!("Full Name: {}", profile.name()))?;
            o.write_line(&format!(
                "Profile Image: {}",
                profile.profile_image().unwrap_or("None")
            ))?;
            o.write_line(&format!("Friends: {}", friend_count))?;
            if !friends.is_empty() {
                o.write_str("Friend List: ")?;
                o.write_line(&friends.iter().map(|p| p.username()).join(", "))?;
            }
            Ok(())
        }
        Reply::Friendships(pairs) => {
            if pairs.is_empty() {
                return o.write_line("No friendships.");
            }
            o.write_line("Friendships:")?;
            for (a, b) in pairs {
                o.write_line(&format!("- {} -- {}", a.username(), b.username()))?;
            }
            Ok(())
        }
        Reply::Stats {
            profiles,
            friendships,
            communities,
        } => o.write_line(&format!(
            "profiles: {}, friendships: {}, communities: {}",
            profiles, friendships, communities
        )),
    }
}

fn write_profile_list(profiles: &[&Profile], o: &mut dyn Output) -> Result<()> {
    for profile in profiles {
        o.write_str("- ")?;
        o.write_str(profile.username().as_str())?;
        o.write_str(" (")?;
        o.write_str(profile.name())?;
        o.write(')')?;
        if profile.profile_image().is_some_and(|image| !image.is_empty()) {
            o.write_str(" [has profile image]")?;
        }
        o.newline()?;
    }
    Ok(())
}

fn write_json(reply: &Reply, o: &mut dyn Output) -> Result<()> {
    let value = match reply {
        Reply::Done(_) => return Ok(()),
        Reply::Friendship { a, b, friends } => json!({ "a": a, "b": b, "friends": friends }),
        Reply::Friends { username, friends } => {
            json!({ "username": username, "friends": friends })
        }
        Reply::Mutual { a, b, friends } => json!({ "a": a, "b": b, "mutual": friends }),
        Reply::View {
            profile,
            friend_count,
            friends,
        } => json!({
            "profile": profile,
            "friend_count": friend_count,
            "friends": friends.iter().map(|p| p.username()).collect_vec(),
        }),
        Reply::Friendships(pairs) => json!({
            "friendships": pairs
                .iter()
                .map(|(a, b)| [a.username(), b.username()])
                .collect_vec(),
        }),
        Reply::Stats {
            profiles,
            friendships,
            communities,
        } => json!({
            "profiles": profiles,
            "friendships": friendships,
            "communities": communities,
        }),
    };
    o.write_line(&serde_json::to_string(&value)?)
}

fn write_error(format: Format, line: usize, error: &str, o: &mut dyn Output) -> Result<()> {
    match format {
        Format::Text => o.write_line(&format!("error: {}", error)),
        Format::Json => o.write_line(&serde_json::to_string(
            &json!({ "line": line, "error": error }),
        )?),
    }
}
