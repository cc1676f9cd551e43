use chirp_core::errors::Result;
use chirp_core::FollowService;

use super::{expect_args, keyword, user_name};
use crate::router::CommandHandler;

const SIGNATURE: &str = concat!("^", user_name!(), " ", keyword!("follows"), " ", user_name!(), "$");

/// `<name> follows <name>`: record a follow edge
pub struct FollowsCommand {
    follows: FollowService,
}

impl FollowsCommand {
    pub fn new(follows: FollowService) -> Self {
        Self { follows }
    }
}

impl CommandHandler for FollowsCommand {
    fn name(&self) -> &'static str {
        "follows"
    }

    fn signature(&self) -> &str {
        SIGNATURE
    }

    fn execute(&self, args: &[String]) -> Result<Option<String>> {
        let [follower, followed] = expect_args::<2>(self.name(), args)?;
        self.follows.set_following(follower, followed)?;
        Ok(None)
    }
}
