use chirp_core::errors::Result;
use chirp_core::render::join_lines;
use chirp_core::{AggregatedPostFormatter, AggregatorService};

use super::{expect_args, keyword, user_name};
use crate::router::CommandHandler;

const SIGNATURE: &str = concat!("^", user_name!(), " ", keyword!("wall"), "$");

/// `<name> wall`: own posts plus followees' posts, newest first
///
/// Always returns output; an empty wall is the empty string.
pub struct WallCommand {
    aggregator: AggregatorService,
    formatter: AggregatedPostFormatter,
}

impl WallCommand {
    pub fn new(aggregator: AggregatorService, formatter: AggregatedPostFormatter) -> Self {
        Self {
            aggregator,
            formatter,
        }
    }
}

impl CommandHandler for WallCommand {
    fn name(&self) -> &'static str {
        "wall"
    }

    fn signature(&self) -> &str {
        SIGNATURE
    }

    fn execute(&self, args: &[String]) -> Result<Option<String>> {
        let [user] = expect_args::<1>(self.name(), args)?;
        let wall = self.aggregator.get_aggregated_posts(user)?;
        Ok(Some(join_lines(&wall, &self.formatter)))
    }
}
