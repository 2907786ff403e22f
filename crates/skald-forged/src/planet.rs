//! Planet generation and staged reveals.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use skald_core::TableRegistry;

use crate::draw::draw_text;
use crate::error::{ForgedError, ForgedResult};
use crate::region::SpaceRegion;

/// How many closer looks a planet yields before it is fully surveyed.
pub const MAX_CLOSER_LOOKS: usize = 3;

/// A generated planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Planet name.
    pub name: String,
    /// Region of the Forge the planet sits in.
    pub region: SpaceRegion,
    /// Planet class (desert world, ocean world, ...).
    pub class: String,
    /// The first glimpse from orbit.
    pub observed_from_space: String,
    /// Surveyed details, in reveal order, at most [`MAX_CLOSER_LOOKS`].
    pub closer_looks: Vec<String>,
    /// Whether the planet bears life, once revealed.
    pub life: Option<String>,
}

impl Planet {
    /// Generate a planet named `name` in `region`: rolls its class and the
    /// view from space.
    pub fn generate(
        registry: &TableRegistry,
        name: impl Into<String>,
        region: SpaceRegion,
        rng: &mut StdRng,
    ) -> ForgedResult<Self> {
        let class = draw_text(registry, "Planet Class", rng)?;
        let observed_from_space = draw_text(registry, "Planet Observed From Space", rng)?;
        Ok(Self {
            name: name.into(),
            region,
            class,
            observed_from_space,
            closer_looks: Vec::new(),
            life: None,
        })
    }

    /// Survey another detail and return it. Fails with
    /// [`ForgedError::FullyRevealed`] once the planet has yielded
    /// [`MAX_CLOSER_LOOKS`] looks.
    pub fn reveal_closer_look(
        &mut self,
        registry: &TableRegistry,
        rng: &mut StdRng,
    ) -> ForgedResult<String> {
        if self.closer_looks.len() >= MAX_CLOSER_LOOKS {
            return Err(ForgedError::FullyRevealed(self.name.clone()));
        }
        let look = draw_text(registry, "Planet Closer Look", rng)?;
        self.closer_looks.push(look.clone());
        Ok(look)
    }

    /// Reveal whether the planet bears life. The first call draws it;
    /// later calls return the existing value.
    pub fn reveal_life(
        &mut self,
        registry: &TableRegistry,
        rng: &mut StdRng,
    ) -> ForgedResult<&str> {
        if self.life.is_none() {
            self.life = Some(draw_text(registry, "Planet Life", rng)?);
        }
        Ok(self.life.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use skald_core::{Game, OracleEntry, OracleError, OracleTable};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn single(name: &str, text: &str) -> OracleTable {
        OracleTable::new(name, 1)
            .with_game(Game::Starforged)
            .with_entry(OracleEntry::range(1, 1, text))
    }

    fn test_registry() -> TableRegistry {
        let mut reg = TableRegistry::new();
        reg.insert(single("Planet Class", "Desert World"));
        reg.insert(single("Planet Observed From Space", "Vast dune seas"));
        reg.insert(single("Planet Closer Look", "Towering rock formations"));
        reg.insert(single("Planet Life", "None"));
        reg
    }

    #[test]
    fn generate_rolls_class_and_first_glimpse() {
        let reg = test_registry();
        let p = Planet::generate(&reg, "Vesper", SpaceRegion::Expanse, &mut rng()).unwrap();
        assert_eq!(p.name, "Vesper");
        assert_eq!(p.region, SpaceRegion::Expanse);
        assert_eq!(p.class, "Desert World");
        assert_eq!(p.observed_from_space, "Vast dune seas");
        assert!(p.closer_looks.is_empty());
        assert_eq!(p.life, None);
    }

    #[test]
    fn closer_looks_stop_at_the_cap() {
        let reg = test_registry();
        let mut p = Planet::generate(&reg, "Vesper", SpaceRegion::Expanse, &mut rng()).unwrap();
        for _ in 0..MAX_CLOSER_LOOKS {
            assert_eq!(
                p.reveal_closer_look(&reg, &mut rng()).unwrap(),
                "Towering rock formations"
            );
        }
        assert_eq!(p.closer_looks.len(), MAX_CLOSER_LOOKS);
        let err = p.reveal_closer_look(&reg, &mut rng()).unwrap_err();
        assert!(matches!(err, ForgedError::FullyRevealed(name) if name == "Vesper"));
    }

    #[test]
    fn life_is_drawn_only_once() {
        let reg = test_registry();
        let mut p = Planet::generate(&reg, "Vesper", SpaceRegion::Expanse, &mut rng()).unwrap();
        assert_eq!(p.reveal_life(&reg, &mut rng()).unwrap(), "None");
        // A later call must return the stored value, not roll again.
        p.life = Some("edited by hand".to_string());
        assert_eq!(p.reveal_life(&reg, &mut rng()).unwrap(), "edited by hand");
    }

    #[test]
    fn generate_fails_on_a_missing_table() {
        let mut reg = TableRegistry::new();
        reg.insert(single("Planet Class", "Desert World"));
        let err = Planet::generate(&reg, "Vesper", SpaceRegion::Terminus, &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            ForgedError::Oracle(OracleError::UnknownTable(name)) if name == "Planet Observed From Space"
        ));
    }
}
