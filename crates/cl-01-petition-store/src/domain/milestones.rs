//! # Milestone Tiers
//!
//! The fixed badge table evaluated against the current signature count.
//! Thirteen tiers from 100 to 50,000,000 signatures. Evaluation is pure;
//! the sync layer re-runs it periodically and overwrites achievements by id
//! in the store.

use chrono::{DateTime, Utc};
use shared_types::entities::Achievement;

/// Color applied to badges whose target has not been reached yet.
pub const DIMMED_COLOR: &str = "#9E9E9E";

/// One row of the fixed milestone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneTier {
    /// Stable tier id, used as the achievement id.
    pub id: &'static str,
    /// Badge display name.
    pub badge_name: &'static str,
    /// Badge description.
    pub badge_description: &'static str,
    /// Signature count required for this tier.
    pub target: u64,
    /// Badge icon.
    pub icon: &'static str,
    /// Badge color when achieved.
    pub color: &'static str,
}

/// The fixed milestone table, ascending by target.
pub const MILESTONE_TIERS: [MilestoneTier; 13] = [
    MilestoneTier {
        id: "milestone-100",
        badge_name: "Primeiras Assinaturas",
        badge_description: "A petição alcançou 100 assinaturas",
        target: 100,
        icon: "🌱",
        color: "#8BC34A",
    },
    MilestoneTier {
        id: "milestone-500",
        badge_name: "Voz Ativa",
        badge_description: "A petição alcançou 500 assinaturas",
        target: 500,
        icon: "📣",
        color: "#4CAF50",
    },
    MilestoneTier {
        id: "milestone-1000",
        badge_name: "Mobilização",
        badge_description: "A petição alcançou 1.000 assinaturas",
        target: 1_000,
        icon: "✊",
        color: "#009688",
    },
    MilestoneTier {
        id: "milestone-5000",
        badge_name: "Comunidade Engajada",
        badge_description: "A petição alcançou 5.000 assinaturas",
        target: 5_000,
        icon: "🤝",
        color: "#00BCD4",
    },
    MilestoneTier {
        id: "milestone-10000",
        badge_name: "Força Local",
        badge_description: "A petição alcançou 10.000 assinaturas",
        target: 10_000,
        icon: "🏘️",
        color: "#03A9F4",
    },
    MilestoneTier {
        id: "milestone-50000",
        badge_name: "Movimento Regional",
        badge_description: "A petição alcançou 50.000 assinaturas",
        target: 50_000,
        icon: "🌆",
        color: "#2196F3",
    },
    MilestoneTier {
        id: "milestone-100000",
        badge_name: "Eco Estadual",
        badge_description: "A petição alcançou 100.000 assinaturas",
        target: 100_000,
        icon: "🏛️",
        color: "#3F51B5",
    },
    MilestoneTier {
        id: "milestone-500000",
        badge_name: "Onda Nacional",
        badge_description: "A petição alcançou 500.000 assinaturas",
        target: 500_000,
        icon: "🌊",
        color: "#673AB7",
    },
    MilestoneTier {
        id: "milestone-1000000",
        badge_name: "Um Milhão de Vozes",
        badge_description: "A petição alcançou 1.000.000 de assinaturas",
        target: 1_000_000,
        icon: "⭐",
        color: "#9C27B0",
    },
    MilestoneTier {
        id: "milestone-5000000",
        badge_name: "Clamor Popular",
        badge_description: "A petição alcançou 5.000.000 de assinaturas",
        target: 5_000_000,
        icon: "🔥",
        color: "#E91E63",
    },
    MilestoneTier {
        id: "milestone-10000000",
        badge_name: "Marco Histórico",
        badge_description: "A petição alcançou 10.000.000 de assinaturas",
        target: 10_000_000,
        icon: "🏆",
        color: "#F44336",
    },
    MilestoneTier {
        id: "milestone-25000000",
        badge_name: "Voz de um Povo",
        badge_description: "A petição alcançou 25.000.000 de assinaturas",
        target: 25_000_000,
        icon: "🎺",
        color: "#FF9800",
    },
    MilestoneTier {
        id: "milestone-50000000",
        badge_name: "Consenso Nacional",
        badge_description: "A petição alcançou 50.000.000 de assinaturas",
        target: 50_000_000,
        icon: "👑",
        color: "#FFD700",
    },
];

/// Evaluate one tier against the current signature count.
///
/// `achieved = count >= target`; unachieved tiers carry [`DIMMED_COLOR`]
/// and no achievement date.
#[must_use]
pub fn evaluate_tier(tier: &MilestoneTier, count: u64, now: DateTime<Utc>) -> Achievement {
    let achieved = count >= tier.target;
    Achievement {
        id: tier.id.to_string(),
        badge_name: tier.badge_name.to_string(),
        badge_description: tier.badge_description.to_string(),
        target: tier.target,
        achieved,
        achieved_at: achieved.then_some(now),
        icon: tier.icon.to_string(),
        color: if achieved {
            tier.color.to_string()
        } else {
            DIMMED_COLOR.to_string()
        },
    }
}

/// Evaluate the whole table against the current signature count.
#[must_use]
pub fn evaluate_all(count: u64, now: DateTime<Utc>) -> Vec<Achievement> {
    MILESTONE_TIERS
        .iter()
        .map(|tier| evaluate_tier(tier, count, now))
        .collect()
}
