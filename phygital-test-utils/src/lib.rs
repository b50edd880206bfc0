pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{directus::factory as directus_factory, spotify::factory as spotify_factory},
        TestBuilder, TestContext, TestError,
    };
}
