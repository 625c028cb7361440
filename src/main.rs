//! ForestSustain: runs the forest_page app.

use bevy::prelude::*;
use forest_page::ForestPageBuilder;

fn main() -> AppExit {
    let _ = dotenvy::dotenv();
    ForestPageBuilder::new().page_config().build().run()
}
