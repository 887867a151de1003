use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn blizzard<'a>(&'a mut self) -> BlizzardFixtures<'a> {
        BlizzardFixtures { setup: self }
    }
}

pub struct BlizzardFixtures<'a> {
    pub setup: &'a mut TestContext,
}
