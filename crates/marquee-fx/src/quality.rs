#![forbid(unsafe_code)]

//! One-shot quality classification and particle tuning.
//!
//! The classifier maps a [`CapabilitySnapshot`] to one of three tiers, and
//! each tier to a fixed tuning table. Classification is a pure function; the
//! once-per-session behavior comes from taking the snapshot once at startup
//! and never re-reading it. A session keeps its initial tier for its
//! lifetime even if the environment changes underneath it.
//!
//! Decision policy, first match wins:
//! 1. Any of reduced-motion / reduced-data / slow-update / save-data
//!    -> `Low`.
//! 2. cores <= 4 or memory <= 4 GB -> `Balanced`.
//! 3. Otherwise -> `High`.
//!
//! Unknown core/memory counts are assumed optimistic (8) so a terminal that
//! reports nothing still gets the full experience; explicit preference flags
//! always win over hardware guesses.

use marquee_core::capability::CapabilitySnapshot;

/// Cores/memory assumed when the platform reports nothing.
const ASSUMED_CORES: u32 = 8;
const ASSUMED_MEMORY_GB: u32 = 8;

/// Discrete quality classification, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityTier {
    Low,
    Balanced,
    High,
}

impl QualityTier {
    /// Classify a capability snapshot. Pure: equal snapshots always yield
    /// equal tiers.
    #[must_use]
    pub fn classify(snapshot: &CapabilitySnapshot) -> Self {
        if snapshot.prefers_quiet() {
            return Self::Low;
        }
        let cores = snapshot.cores.unwrap_or(ASSUMED_CORES);
        let memory = snapshot.memory_gb.unwrap_or(ASSUMED_MEMORY_GB);
        if cores <= 4 || memory <= 4 {
            return Self::Balanced;
        }
        Self::High
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Balanced => "balanced",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for QualityTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "balanced" => Ok(Self::Balanced),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

/// Fixed tuning constants consumed by the particle backdrop.
///
/// The goal is the same vibe at lower cost: fewer particles but slightly
/// larger points, a lower frame cap (still smooth because the motion is
/// ambient), and a capped pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleTuning {
    /// Upper bound on rendered frames per second.
    pub max_fps: u32,
    /// Particle count before area clamping.
    pub particle_count: u32,
    /// Base point size in the collaborator's own units.
    pub base_size: f64,
    /// Drift speed multiplier.
    pub speed: f64,
    /// How strongly particles follow the pointer.
    pub hover_factor: f64,
    /// Pixel-ratio cap handed to the renderer.
    pub pixel_ratio: f64,
    /// Spatial spread of the field.
    pub spread: f64,
    /// Per-particle size jitter in `[0, 1]`.
    pub size_randomness: f64,
}

impl ParticleTuning {
    const HIGH: Self = Self {
        max_fps: 50,
        particle_count: 185,
        base_size: 180.0,
        speed: 0.14,
        hover_factor: 1.8,
        pixel_ratio: 1.15,
        spread: 12.0,
        size_randomness: 0.62,
    };

    const BALANCED: Self = Self {
        max_fps: 45,
        particle_count: 130,
        base_size: 195.0,
        speed: 0.12,
        hover_factor: 1.55,
        pixel_ratio: 1.0,
        spread: 12.0,
        size_randomness: 0.58,
    };

    const LOW: Self = Self {
        max_fps: 30,
        particle_count: 90,
        base_size: 210.0,
        speed: 0.1,
        hover_factor: 1.25,
        pixel_ratio: 1.0,
        spread: 11.0,
        size_randomness: 0.5,
    };

    /// Static lookup: tiers map to constants, nothing is computed.
    #[must_use]
    pub const fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::High => Self::HIGH,
            QualityTier::Balanced => Self::BALANCED,
            QualityTier::Low => Self::LOW,
        }
    }
}

/// A tier plus its tuning, captured once at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityProfile {
    pub tier: QualityTier,
    pub tuning: ParticleTuning,
    /// True when the snapshot asked for stillness; the page may skip motion
    /// entirely rather than just tune it down.
    pub reduced_motion: bool,
}

impl QualityProfile {
    /// Capture the session profile from a snapshot taken by the caller.
    #[must_use]
    pub fn from_snapshot(snapshot: &CapabilitySnapshot) -> Self {
        let tier = QualityTier::classify(snapshot);
        Self {
            tier,
            tuning: ParticleTuning::for_tier(tier),
            reduced_motion: snapshot.reduced_motion,
        }
    }

    /// Capture with a forced tier (CLI override); the once-per-session
    /// contract is unchanged.
    #[must_use]
    pub fn forced(tier: QualityTier, snapshot: &CapabilitySnapshot) -> Self {
        Self {
            tier,
            tuning: ParticleTuning::for_tier(tier),
            reduced_motion: snapshot.reduced_motion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(cores: u32, memory: u32) -> CapabilitySnapshot {
        CapabilitySnapshot {
            cores: Some(cores),
            memory_gb: Some(memory),
            ..CapabilitySnapshot::unconstrained()
        }
    }

    #[test]
    fn reduced_motion_always_wins() {
        let snap = CapabilitySnapshot {
            reduced_motion: true,
            ..snapshot(16, 64)
        };
        assert_eq!(QualityTier::classify(&snap), QualityTier::Low);
    }

    #[test]
    fn each_quiet_flag_forces_low() {
        for field in 0..4 {
            let mut snap = snapshot(16, 64);
            match field {
                0 => snap.reduced_motion = true,
                1 => snap.reduced_data = true,
                2 => snap.slow_update = true,
                _ => snap.save_data = true,
            }
            assert_eq!(QualityTier::classify(&snap), QualityTier::Low);
        }
    }

    #[test]
    fn weak_hardware_is_balanced() {
        assert_eq!(QualityTier::classify(&snapshot(2, 8)), QualityTier::Balanced);
        assert_eq!(QualityTier::classify(&snapshot(8, 4)), QualityTier::Balanced);
        assert_eq!(QualityTier::classify(&snapshot(4, 4)), QualityTier::Balanced);
    }

    #[test]
    fn strong_hardware_is_high() {
        assert_eq!(QualityTier::classify(&snapshot(8, 16)), QualityTier::High);
    }

    #[test]
    fn unknown_hardware_is_assumed_capable() {
        let snap = CapabilitySnapshot {
            cores: None,
            memory_gb: None,
            ..CapabilitySnapshot::unconstrained()
        };
        assert_eq!(QualityTier::classify(&snap), QualityTier::High);
    }

    #[test]
    fn conservative_snapshot_lands_low() {
        // The no-environment fallback reports reduced motion.
        assert_eq!(
            QualityTier::classify(&CapabilitySnapshot::conservative()),
            QualityTier::Low
        );
    }

    #[test]
    fn tier_constants_are_fixed() {
        let high = ParticleTuning::for_tier(QualityTier::High);
        assert_eq!(high.max_fps, 50);
        assert_eq!(high.particle_count, 185);
        assert_eq!(high.pixel_ratio, 1.15);

        let balanced = ParticleTuning::for_tier(QualityTier::Balanced);
        assert_eq!(balanced.max_fps, 45);
        assert_eq!(balanced.particle_count, 130);

        let low = ParticleTuning::for_tier(QualityTier::Low);
        assert_eq!(low.max_fps, 30);
        assert_eq!(low.particle_count, 90);
        assert_eq!(low.spread, 11.0);
    }

    #[test]
    fn tier_parses_from_cli_strings() {
        assert_eq!("high".parse(), Ok(QualityTier::High));
        assert_eq!(" Balanced ".parse(), Ok(QualityTier::Balanced));
        assert_eq!("LOW".parse(), Ok(QualityTier::Low));
        assert_eq!("ultra".parse::<QualityTier>(), Err(()));
    }

    #[test]
    fn profile_carries_reduced_motion_flag() {
        let snap = CapabilitySnapshot {
            reduced_motion: true,
            ..CapabilitySnapshot::unconstrained()
        };
        let profile = QualityProfile::from_snapshot(&snap);
        assert_eq!(profile.tier, QualityTier::Low);
        assert!(profile.reduced_motion);

        let forced = QualityProfile::forced(QualityTier::High, &snap);
        assert_eq!(forced.tier, QualityTier::High);
        assert!(forced.reduced_motion);
    }
}
