use chirp_core::errors::Result;
use chirp_core::render::join_lines;
use chirp_core::{PostFormatter, TimelineService};

use super::{expect_args, user_name};
use crate::router::CommandHandler;

const SIGNATURE: &str = concat!("^", user_name!(), "$");

/// `<name>`: the user's timeline, one line per post, newest first
///
/// Always returns output; an empty timeline is the empty string.
pub struct ReadCommand {
    timeline: TimelineService,
    formatter: PostFormatter,
}

impl ReadCommand {
    pub fn new(timeline: TimelineService, formatter: PostFormatter) -> Self {
        Self {
            timeline,
            formatter,
        }
    }
}

impl CommandHandler for ReadCommand {
    fn name(&self) -> &'static str {
        "read"
    }

    fn signature(&self) -> &str {
        SIGNATURE
    }

    fn execute(&self, args: &[String]) -> Result<Option<String>> {
        let [user] = expect_args::<1>(self.name(), args)?;
        let posts = self.timeline.get_timeline(user)?;
        Ok(Some(join_lines(&posts, &self.formatter)))
    }
}
