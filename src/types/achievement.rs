//! Achievement descriptor.

use serde::Serialize;

use super::factory::BuildError;

/// An unlockable achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    /// Hidden achievements are not listed until unlocked.
    pub hidden: bool,
    pub points: u32,
}

/// Builder for achievements.
#[derive(Debug, Clone, Default)]
pub struct AchievementBuilder {
    name: Option<String>,
    description: Option<String>,
    hidden: bool,
    points: u32,
}

impl AchievementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    pub fn points(&mut self, points: u32) -> &mut Self {
        self.points = points;
        self
    }

    pub fn build(self) -> Result<Achievement, BuildError> {
        let name = self.name.ok_or(BuildError::MissingField("name"))?;
        let description = self
            .description
            .ok_or(BuildError::MissingField("description"))?;

        Ok(Achievement {
            name,
            description,
            hidden: self.hidden,
            points: self.points,
        })
    }
}
