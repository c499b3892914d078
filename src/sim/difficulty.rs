//! Difficulty scaling
//!
//! A pure function of the stage number. Health values grow linearly with
//! the stage; the AA-gun fire interval shrinks linearly down to a floor so
//! the fire rate cannot exceed a hard cap.

use crate::consts::*;

/// Enemy parameters for one stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageParams {
    pub warehouse_health: i32,
    pub aa_gun_health: i32,
    pub aa_gun_fire_ms: f64,
    pub fighter_health: i32,
    pub battleship_max_health: i32,
}

impl StageParams {
    /// Compute parameters for a 1-based stage number
    pub fn for_stage(stage: u32) -> Self {
        let steps = stage.saturating_sub(1) as i32;
        Self {
            warehouse_health: BASE_WAREHOUSE_HEALTH + steps * WAREHOUSE_HEALTH_PER_STAGE,
            aa_gun_health: BASE_AA_GUN_HEALTH + steps * AA_GUN_HEALTH_PER_STAGE,
            aa_gun_fire_ms: (BASE_AA_GUN_FIRE_MS
                - steps as f64 * AA_GUN_FIRE_DECREASE_PER_STAGE_MS)
                .max(MIN_AA_GUN_FIRE_MS),
            fighter_health: BASE_FIGHTER_HEALTH + steps * FIGHTER_HEALTH_PER_STAGE,
            battleship_max_health: BASE_BATTLESHIP_HEALTH + steps * BATTLESHIP_HEALTH_PER_STAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stage_one_is_base() {
        let p = StageParams::for_stage(1);
        assert_eq!(p.warehouse_health, BASE_WAREHOUSE_HEALTH);
        assert_eq!(p.aa_gun_health, BASE_AA_GUN_HEALTH);
        assert_eq!(p.aa_gun_fire_ms, BASE_AA_GUN_FIRE_MS);
        assert_eq!(p.fighter_health, BASE_FIGHTER_HEALTH);
        assert_eq!(p.battleship_max_health, BASE_BATTLESHIP_HEALTH);
    }

    #[test]
    fn test_linear_growth() {
        let p = StageParams::for_stage(4);
        assert_eq!(p.warehouse_health, 160);
        assert_eq!(p.aa_gun_health, 80);
        assert_eq!(p.aa_gun_fire_ms, 1700.0);
        assert_eq!(p.fighter_health, 120);
        assert_eq!(p.battleship_max_health, 1100);
    }

    #[test]
    fn test_fire_interval_floors() {
        // 2000 - 12 * 100 = 800 is reached at stage 13
        assert_eq!(StageParams::for_stage(13).aa_gun_fire_ms, MIN_AA_GUN_FIRE_MS);
        assert_eq!(StageParams::for_stage(50).aa_gun_fire_ms, MIN_AA_GUN_FIRE_MS);
    }

    proptest! {
        #[test]
        fn prop_health_monotonic_non_decreasing(stage in 1u32..500) {
            let a = StageParams::for_stage(stage);
            let b = StageParams::for_stage(stage + 1);
            prop_assert!(b.warehouse_health >= a.warehouse_health);
            prop_assert!(b.aa_gun_health >= a.aa_gun_health);
            prop_assert!(b.fighter_health >= a.fighter_health);
            prop_assert!(b.battleship_max_health >= a.battleship_max_health);
        }

        #[test]
        fn prop_fire_interval_monotonic_with_floor(stage in 1u32..500) {
            let a = StageParams::for_stage(stage);
            let b = StageParams::for_stage(stage + 1);
            prop_assert!(b.aa_gun_fire_ms <= a.aa_gun_fire_ms);
            prop_assert!(a.aa_gun_fire_ms >= MIN_AA_GUN_FIRE_MS);
        }
    }
}
