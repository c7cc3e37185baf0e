//! # Advisories
//!
//! Stateless mapping from a projection to user-facing notifications.
//! Deduplication and display belong to the UI.

use crate::domain::{AdvisoryThresholds, Notification, PlantProjection, Vitality};

/// Notifications worth surfacing for `projection`, most urgent first.
pub fn advise(projection: &PlantProjection, thresholds: &AdvisoryThresholds) -> Vec<Notification> {
    let id = projection.plant_id;
    let mut out = Vec::new();

    match projection.vitality {
        Vitality::Dead => {
            out.push(
                Notification::new("Plant has died")
                    .with_description(format!("Plant #{} can no longer be watered or harvested.", id)),
            );
            return out;
        }
        Vitality::Wilting => {
            out.push(Notification::new("Plant is wilting").with_description(format!(
                "Plant #{} is out of water. Water it before the next update records its death.",
                id
            )));
            return out;
        }
        Vitality::Alive => {}
    }

    if projection.water_level <= thresholds.critical_water_level {
        let mut description = format!("Plant #{} has {}% water left", id, projection.water_level);
        if let Some(until_dry) = projection.until_dry {
            description.push_str(&format!(", dry in {}s", until_dry.as_secs()));
        }
        description.push('.');
        out.push(Notification::new("Water critically low").with_description(description));
    }

    if projection.harvestable {
        out.push(
            Notification::new("Ready to harvest")
                .with_description(format!("Plant #{} is blooming.", id)),
        );
    } else if projection.stage_eligible {
        let next = projection
            .confirmed_stage
            .next()
            .unwrap_or(projection.confirmed_stage);
        out.push(
            Notification::new("Ready to grow")
                .with_description(format!("Plant #{} can advance to {}.", id, next)),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::project;
    use crate::domain::ProjectionConfig;
    use lg_01_contract_model::{AccountAddress, GrowthStage, Plant, PlantId};

    const T0: u64 = 1_700_000_000;

    fn plant() -> Plant {
        Plant::seeded(PlantId::new(3).unwrap(), AccountAddress::ZERO, T0)
    }

    fn titles(p: &Plant, now: u64) -> Vec<String> {
        let view = project(&ProjectionConfig::default(), p, now).unwrap();
        advise(&view, &AdvisoryThresholds::default())
            .into_iter()
            .map(|n| n.title)
            .collect()
    }

    #[test]
    fn test_healthy_seed_is_quiet() {
        assert!(titles(&plant(), T0 + 10).is_empty());
    }

    #[test]
    fn test_ready_to_grow() {
        assert_eq!(titles(&plant(), T0 + 60), ["Ready to grow"]);
    }

    #[test]
    fn test_low_water_warning() {
        // 100 - 40 * 2 = 20
        let view = project(&ProjectionConfig::default(), &plant(), T0 + 1_200).unwrap();
        let notes = advise(&view, &AdvisoryThresholds::default());
        assert_eq!(notes[0].title, "Water critically low");
        assert_eq!(
            notes[0].description.as_deref(),
            Some("Plant #3 has 20% water left, dry in 300s.")
        );
    }

    #[test]
    fn test_wilting_is_the_only_advice() {
        assert_eq!(titles(&plant(), T0 + 1_500), ["Plant is wilting"]);
    }

    #[test]
    fn test_dead_is_the_only_advice() {
        let mut p = plant();
        p.is_dead = true;
        assert_eq!(titles(&p, T0), ["Plant has died"]);
    }

    #[test]
    fn test_blooming_ready_to_harvest() {
        let mut p = plant();
        p.stage = GrowthStage::Blooming;
        assert_eq!(titles(&p, T0 + 200), ["Ready to harvest"]);
    }

    #[test]
    fn test_custom_threshold() {
        let view = project(&ProjectionConfig::default(), &plant(), T0 + 600).unwrap();
        let strict = AdvisoryThresholds {
            critical_water_level: 80,
        };
        assert_eq!(advise(&view, &strict)[0].title, "Water critically low");
    }
}
