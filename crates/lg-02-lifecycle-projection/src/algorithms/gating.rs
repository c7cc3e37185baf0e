//! # Action Gating
//!
//! Client-side pre-checks that mirror the ledger's `require` guards, so
//! the UI can disable actions that would waste a transaction. The ledger
//! stays authoritative and may still reject.

use super::growth::{next_stage_due_at, stage_at, stage_eligible_at};
use super::vitality::vitality_at;
use crate::domain::{
    invariant_valid_query, Action, ActionGate, ProjectionConfig, ProjectionError, RejectReason,
    Vitality,
};
use lg_01_contract_model::{AccountAddress, GrowthStage, Plant};

/// Check whether `caller` submitting `action` at `now` is expected to succeed.
///
/// Rules:
/// - watering and harvesting are owner-only; stage updates are open to anyone
/// - nothing is allowed on a dead plant
/// - watering is allowed while the ledger has not recorded death, even on
///   a dry plant
/// - stage updates on a dry plant would record its death, so they are refused
/// - harvesting requires the plant to reach Blooming once pending stage
///   updates apply
pub fn check_action(
    config: &ProjectionConfig,
    plant: &Plant,
    caller: &AccountAddress,
    action: Action,
    now: u64,
) -> Result<ActionGate, ProjectionError> {
    invariant_valid_query(plant, now)?;

    let owner_only = matches!(action, Action::Water | Action::Harvest);
    if owner_only && plant.owner != *caller {
        return Ok(ActionGate::Rejected(RejectReason::NotOwner));
    }

    let vitality = vitality_at(config, plant, now);
    if vitality == Vitality::Dead {
        return Ok(ActionGate::Rejected(RejectReason::Dead));
    }

    let gate = match action {
        Action::Water => ActionGate::Allowed,
        Action::AdvanceStage => {
            if plant.stage.is_terminal() {
                ActionGate::Rejected(RejectReason::FullyGrown)
            } else if vitality == Vitality::Wilting {
                ActionGate::Rejected(RejectReason::Starved)
            } else if stage_eligible_at(config, plant, now) {
                ActionGate::Allowed
            } else if let Some(due) = next_stage_due_at(config, plant) {
                ActionGate::Rejected(RejectReason::NotYetDue {
                    remaining_secs: due.saturating_sub(now),
                })
            } else {
                ActionGate::Rejected(RejectReason::StageClockUnknown)
            }
        }
        Action::Harvest => {
            if vitality == Vitality::Wilting {
                ActionGate::Rejected(RejectReason::Starved)
            } else if stage_at(config, plant, now) == GrowthStage::Blooming {
                ActionGate::Allowed
            } else {
                ActionGate::Rejected(RejectReason::NotBlooming)
            }
        }
    };
    Ok(gate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_01_contract_model::PlantId;

    const T0: u64 = 1_700_000_000;

    fn owner() -> AccountAddress {
        AccountAddress::from_bytes([0x01; 20])
    }

    fn stranger() -> AccountAddress {
        AccountAddress::from_bytes([0x02; 20])
    }

    fn plant() -> Plant {
        Plant::seeded(PlantId::new(1).unwrap(), owner(), T0)
    }

    fn gate(plant: &Plant, caller: AccountAddress, action: Action, now: u64) -> ActionGate {
        check_action(&ProjectionConfig::default(), plant, &caller, action, now).unwrap()
    }

    #[test]
    fn test_owner_can_water() {
        assert_eq!(gate(&plant(), owner(), Action::Water, T0 + 10), ActionGate::Allowed);
    }

    #[test]
    fn test_stranger_cannot_water_or_harvest() {
        let rejected = ActionGate::Rejected(RejectReason::NotOwner);
        assert_eq!(gate(&plant(), stranger(), Action::Water, T0), rejected);
        assert_eq!(gate(&plant(), stranger(), Action::Harvest, T0), rejected);
    }

    #[test]
    fn test_anyone_can_advance_stage() {
        assert_eq!(
            gate(&plant(), stranger(), Action::AdvanceStage, T0 + 60),
            ActionGate::Allowed
        );
    }

    #[test]
    fn test_dead_plant_rejects_everything() {
        let mut p = plant();
        p.is_dead = true;
        for action in [Action::Water, Action::AdvanceStage, Action::Harvest] {
            assert_eq!(
                gate(&p, owner(), action, T0 + 10),
                ActionGate::Rejected(RejectReason::Dead)
            );
        }
    }

    #[test]
    fn test_wilting_plant_can_still_be_watered() {
        let p = plant();
        let dry = T0 + 2_000;
        assert_eq!(gate(&p, owner(), Action::Water, dry), ActionGate::Allowed);
        assert_eq!(
            gate(&p, owner(), Action::AdvanceStage, dry),
            ActionGate::Rejected(RejectReason::Starved)
        );
        assert_eq!(
            gate(&p, owner(), Action::Harvest, dry),
            ActionGate::Rejected(RejectReason::Starved)
        );
    }

    #[test]
    fn test_stage_not_yet_due() {
        assert_eq!(
            gate(&plant(), owner(), Action::AdvanceStage, T0 + 20),
            ActionGate::Rejected(RejectReason::NotYetDue { remaining_secs: 40 })
        );
    }

    #[test]
    fn test_per_stage_unknown_clock_rejects_advance() {
        let config = ProjectionConfig::new(
            lg_01_contract_model::LifecycleConstants::default(),
            lg_01_contract_model::StageTiming::PerStage,
        )
        .unwrap();
        let mut p = plant();
        p.stage = GrowthStage::Sprout;
        p.stage_started_at = None;
        assert_eq!(
            check_action(&config, &p, &owner(), Action::AdvanceStage, T0 + 500).unwrap(),
            ActionGate::Rejected(RejectReason::StageClockUnknown)
        );
    }

    #[test]
    fn test_blooming_cannot_advance() {
        let mut p = plant();
        p.stage = GrowthStage::Blooming;
        assert_eq!(
            gate(&p, owner(), Action::AdvanceStage, T0 + 200),
            ActionGate::Rejected(RejectReason::FullyGrown)
        );
    }

    #[test]
    fn test_harvest_after_pending_stage_updates() {
        // Confirmed Growing, but the ledger would bloom it before harvesting.
        let mut p = plant();
        p.stage = GrowthStage::Growing;
        assert_eq!(
            gate(&p, owner(), Action::Harvest, T0 + 179),
            ActionGate::Rejected(RejectReason::NotBlooming)
        );
        assert_eq!(gate(&p, owner(), Action::Harvest, T0 + 180), ActionGate::Allowed);
    }

    #[test]
    fn test_missing_plant_is_invalid_input() {
        let missing = Plant::missing(PlantId::new(1).unwrap());
        assert!(check_action(
            &ProjectionConfig::default(),
            &missing,
            &owner(),
            Action::Water,
            T0
        )
        .is_err());
    }
}
