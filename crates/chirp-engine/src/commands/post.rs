use chirp_core::errors::Result;
use chirp_core::TimelineService;

use super::{expect_args, user_name};
use crate::router::CommandHandler;

const SIGNATURE: &str = concat!("^", user_name!(), " -> (.+)$");

/// `<name> -> <message>`: append a message to the user's timeline
pub struct PostCommand {
    timeline: TimelineService,
}

impl PostCommand {
    pub fn new(timeline: TimelineService) -> Self {
        Self { timeline }
    }
}

impl CommandHandler for PostCommand {
    fn name(&self) -> &'static str {
        "post"
    }

    fn signature(&self) -> &str {
        SIGNATURE
    }

    fn execute(&self, args: &[String]) -> Result<Option<String>> {
        let [user, message] = expect_args::<2>(self.name(), args)?;
        self.timeline.post(user, message)?;
        Ok(None)
    }
}
