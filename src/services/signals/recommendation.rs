//! Recommendation mapping and suggested actions.

use crate::types::{IndicatorSnapshot, Recommendation, ScoreCard, TradeRecommendation};

/// Build the recommendation for a scored snapshot.
///
/// A weak-trend warning shrinks the position-size text of BUY and SELL
/// tiers; the tier itself never changes.
pub fn generate_recommendation(card: &ScoreCard) -> TradeRecommendation {
    let recommendation = Recommendation::from_score(card.score);

    let mut position_size = recommendation.position_size().to_string();
    if card.has_weak_trend() {
        if recommendation.is_buy() {
            position_size.push_str(" → Reduced to 25-50% due to weak trend");
        } else if recommendation.is_sell() {
            position_size.push_str(" → Reduced due to weak trend");
        }
    }

    let reason = if card.score == 0 {
        "Mixed signals - Best to wait for clearer direction".to_string()
    } else if card.score.abs() < 3 {
        "Weak signals - Low conviction setup".to_string()
    } else if !card.warnings.is_empty() {
        format!(
            "Caution advised due to {} warning flag(s)",
            card.warnings.len()
        )
    } else {
        format!(
            "{} factors aligned for this {}",
            card.score.abs(),
            recommendation.label().to_lowercase()
        )
    };

    TradeRecommendation {
        recommendation,
        confidence: recommendation.confidence(),
        position_size,
        emoji: recommendation.emoji().to_string(),
        reason,
    }
}

/// Reward per unit of risk for a long entry at `price`.
///
/// Zero when price is at or below support, where no risk can be measured.
pub fn risk_reward_ratio(price: f64, support: f64, resistance: f64) -> f64 {
    let risk = price - support;
    if risk > 0.0 {
        (resistance - price) / risk
    } else {
        0.0
    }
}

/// Concrete next steps for the recommendation.
pub fn suggested_actions(
    recommendation: Recommendation,
    snapshot: &IndicatorSnapshot,
) -> Vec<String> {
    let IndicatorSnapshot {
        price,
        support,
        resistance,
        adx,
        rvol,
        macd,
        macd_signal,
        ..
    } = *snapshot;

    let mut actions = Vec::new();

    if recommendation == Recommendation::Wait {
        if adx < 25.0 {
            actions.push(format!(
                "WAIT for ADX to rise above 25 for trend confirmation (current: {:.1})",
                adx
            ));
        }
        if rvol < 1.2 {
            actions.push(format!(
                "WAIT for RVOL to exceed 1.2 for volume confirmation (current: {:.1}x)",
                rvol
            ));
        }
        if macd < macd_signal {
            actions.push("Monitor for MACD bullish crossover".to_string());
        }
        actions.push(
            "If entering anyway, use MAXIMUM 25% position size due to weak signals".to_string(),
        );
    } else if recommendation.is_buy() {
        actions.push(format!("Enter at current price: ${:.2}", price));
        actions.push(format!(
            "Set stop-loss at: ${:.2} (Support) - Risk: ${:.2} per share",
            support,
            price - support
        ));
        actions.push(format!(
            "Target resistance: ${:.2} - Potential: ${:.2} per share",
            resistance,
            resistance - price
        ));
        actions.push(format!(
            "Risk/Reward Ratio: 1:{:.2}",
            risk_reward_ratio(price, support, resistance)
        ));
    } else if recommendation.is_sell() {
        actions.push(format!("Exit at current price: ${:.2}", price));
        actions.push(format!(
            "If holding, set stop-loss at: ${:.2} (Resistance)",
            resistance
        ));
        actions.push(format!("Target support: ${:.2}", support));
    }

    actions
}
