//! Settlement generation and staged reveals.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use skald_core::TableRegistry;

use crate::draw::draw_text;
use crate::error::ForgedResult;
use crate::region::SpaceRegion;

/// A generated settlement.
///
/// Generation fills the always-visible fields; projects, trouble, and
/// initial contact are revealed later as play approaches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Settlement name.
    pub name: String,
    /// Region of the Forge the settlement sits in.
    pub region: SpaceRegion,
    /// Where the settlement is (planetside, orbital, deep space).
    pub location: String,
    /// What a visitor notices first.
    pub first_look: String,
    /// Who holds power and how.
    pub authority: String,
    /// Population scale, scoped to the region.
    pub population: String,
    /// Known settlement projects, in reveal order.
    pub projects: Vec<String>,
    /// The settlement's trouble, once revealed.
    pub trouble: Option<String>,
    /// How the settlement receives strangers, once revealed.
    pub initial_contact: Option<String>,
}

impl Settlement {
    /// Generate a settlement in `region`. Draws the name from the
    /// "Settlement Name" oracle unless one is given.
    pub fn generate(
        registry: &TableRegistry,
        region: SpaceRegion,
        name: Option<&str>,
        rng: &mut StdRng,
    ) -> ForgedResult<Self> {
        let name = match name {
            Some(name) => name.to_string(),
            None => draw_text(registry, "Settlement Name", rng)?,
        };
        let location = draw_text(registry, "Settlement Location", rng)?;
        let first_look = draw_text(registry, "Settlement First Look", rng)?;
        let authority = draw_text(registry, "Settlement Authority", rng)?;
        let population = draw_text(registry, &format!("Settlement Population ({region})"), rng)?;
        Ok(Self {
            name,
            region,
            location,
            first_look,
            authority,
            population,
            projects: Vec::new(),
            trouble: None,
            initial_contact: None,
        })
    }

    /// Reveal another settlement project and return it.
    pub fn add_project(
        &mut self,
        registry: &TableRegistry,
        rng: &mut StdRng,
    ) -> ForgedResult<String> {
        let project = draw_text(registry, "Settlement Projects", rng)?;
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Reveal the settlement's trouble. The first call draws it; later
    /// calls return the existing value.
    pub fn reveal_trouble(
        &mut self,
        registry: &TableRegistry,
        rng: &mut StdRng,
    ) -> ForgedResult<&str> {
        if self.trouble.is_none() {
            self.trouble = Some(draw_text(registry, "Settlement Trouble", rng)?);
        }
        Ok(self.trouble.as_deref().unwrap_or_default())
    }

    /// Reveal how the settlement receives strangers. The first call draws
    /// it; later calls return the existing value.
    pub fn reveal_initial_contact(
        &mut self,
        registry: &TableRegistry,
        rng: &mut StdRng,
    ) -> ForgedResult<&str> {
        if self.initial_contact.is_none() {
            self.initial_contact = Some(draw_text(registry, "Settlement Initial Contact", rng)?);
        }
        Ok(self.initial_contact.as_deref().unwrap_or_default())
    }
}
