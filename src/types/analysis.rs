use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance from price, as a fraction of price, that counts as "at" a level.
pub const LEVEL_PROXIMITY: f64 = 0.02;

/// Classic floor pivot levels computed from the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

impl PivotLevels {
    /// Level used as support by the scorer (S2).
    pub fn support(&self) -> f64 {
        self.s2
    }

    /// Level used as resistance by the scorer (R2).
    pub fn resistance(&self) -> f64 {
        self.r2
    }
}

/// Latest value of every indicator series, plus the pivot levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    /// Latest close.
    pub price: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub bb_upper: f64,
    pub bb_middle: f64,
    pub bb_lower: f64,
    pub ema20: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub sma5: f64,
    pub atr: f64,
    pub adx: f64,
    pub di_plus: f64,
    pub di_minus: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub obv: f64,
    /// OBV one bar earlier.
    pub obv_prev: f64,
    pub rvol: f64,
    pub pivots: PivotLevels,
    /// S2 pivot.
    pub support: f64,
    /// R2 pivot.
    pub resistance: f64,
}

impl IndicatorSnapshot {
    /// Bollinger bandwidth as a percentage of the middle band.
    pub fn bandwidth(&self) -> f64 {
        (self.bb_upper - self.bb_lower) / self.bb_middle * 100.0
    }

    /// Strictly above the 5-day SMA. Equal counts as below.
    pub fn is_above_sma5(&self) -> bool {
        self.price > self.sma5
    }

    pub fn is_macd_bullish(&self) -> bool {
        self.macd > self.macd_signal
    }

    /// EMA50 strictly above EMA200.
    pub fn is_golden_cross(&self) -> bool {
        self.ema50 > self.ema200
    }

    /// OBV strictly higher than one bar earlier.
    pub fn is_obv_rising(&self) -> bool {
        self.obv > self.obv_prev
    }

    pub fn is_at_support(&self) -> bool {
        self.is_near(self.support)
    }

    pub fn is_at_resistance(&self) -> bool {
        self.is_near(self.resistance)
    }

    fn is_near(&self, level: f64) -> bool {
        (self.price - level).abs() < self.price * LEVEL_PROXIMITY
    }
}

/// Candlestick patterns recognised on the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlePattern {
    Doji,
    Hammer,
    #[serde(rename = "Bullish Engulfing")]
    BullishEngulfing,
}

impl CandlePattern {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            CandlePattern::Doji => "Doji",
            CandlePattern::Hammer => "Hammer",
            CandlePattern::BullishEngulfing => "Bullish Engulfing",
        }
    }

    /// Upper-case heading used in pattern descriptions.
    pub fn heading(&self) -> &'static str {
        match self {
            CandlePattern::Doji => "DOJI",
            CandlePattern::Hammer => "HAMMER",
            CandlePattern::BullishEngulfing => "BULLISH ENGULFING",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CandlePattern::Doji => "Indecision candle. Small body shows buyers and sellers are balanced. Often signals potential reversal when at support/resistance. Wait for next candle to confirm direction.",
            CandlePattern::Hammer => "Bullish reversal signal. Long lower wick shows strong rejection of lower prices. Most reliable when found at support levels or after a downtrend. Consider buying if confirmed by next candle.",
            CandlePattern::BullishEngulfing => "Strong reversal pattern. Today's green candle completely engulfs yesterday's red candle. Shows shift in momentum from sellers to buyers. High-probability buy signal, especially with high volume.",
        }
    }
}

impl fmt::Display for CandlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heading and description of one detected pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDescription {
    pub name: String,
    pub description: String,
}

impl From<CandlePattern> for PatternDescription {
    fn from(pattern: CandlePattern) -> Self {
        Self {
            name: pattern.heading().to_string(),
            description: pattern.description().to_string(),
        }
    }
}

/// Patterns matched by the latest bar, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternResult {
    pub patterns: Vec<CandlePattern>,
    pub descriptions: Vec<PatternDescription>,
}

impl PatternResult {
    pub fn push(&mut self, pattern: CandlePattern) {
        self.patterns.push(pattern);
        self.descriptions.push(pattern.into());
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Names joined with ", ", or "None".
    pub fn pattern_string(&self) -> String {
        if self.patterns.is_empty() {
            return "None".to_string();
        }
        self.patterns
            .iter()
            .map(CandlePattern::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The nine scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    Rsi,
    Macd,
    Bollinger,
    Sma5,
    Adx,
    Rvol,
    LongTermTrend,
    Obv,
    Stochastic,
}

/// How a breakdown line reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bullish,
    Bearish,
    Neutral,
    Warning,
}

impl Mark {
    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Bullish => "✓",
            Mark::Bearish => "✗",
            Mark::Neutral => "○",
            Mark::Warning => "⚠️",
        }
    }
}

/// One line of score rationale, tied to exactly one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub rule: ScoreRule,
    pub mark: Mark,
    pub points: i32,
    pub message: String,
}

impl fmt::Display for BreakdownEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} → ", self.mark.symbol(), self.message)?;
        if self.points == 0 {
            f.write_str("0")
        } else {
            write!(f, "{:+}", self.points)
        }
    }
}

/// Risk condition raised while scoring. Never changes the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// Bands narrower than 5% of the middle band.
    BollingerSqueeze,
    /// ADX below 20.
    WeakTrend { adx: f64 },
    /// RVOL below 0.8.
    LowVolume { rvol: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::BollingerSqueeze => {
                f.write_str("⚠️ Bollinger Squeeze: Explosive move imminent - Direction unknown")
            }
            Warning::WeakTrend { adx } => write!(
                f,
                "⚠️ ADX < 20 ({:.1}): Weak trend - Reduce position size by 50%",
                adx
            ),
            Warning::LowVolume { rvol } => write!(
                f,
                "⚠️ RVOL < 0.8 ({:.1}x): Low volume - Moves lack conviction",
                rvol
            ),
        }
    }
}

/// Result of running the scoring rules over a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub score: i32,
    pub breakdown: Vec<BreakdownEntry>,
    pub warnings: Vec<Warning>,
}

impl ScoreCard {
    /// Record a rule outcome. The score is always the sum of the breakdown.
    pub fn push(&mut self, rule: ScoreRule, mark: Mark, points: i32, message: impl Into<String>) {
        self.score += points;
        self.breakdown.push(BreakdownEntry {
            rule,
            mark,
            points,
            message: message.into(),
        });
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn has_weak_trend(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::WeakTrend { .. }))
    }
}

/// Seven-tier trade recommendation keyed by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "WEAK BUY")]
    WeakBuy,
    #[serde(rename = "WAIT")]
    Wait,
    #[serde(rename = "WEAK SELL")]
    WeakSell,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl Recommendation {
    /// Map a composite score to a tier; the first matching threshold wins.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 6 => Recommendation::StrongBuy,
            s if s >= 3 => Recommendation::Buy,
            s if s >= 1 => Recommendation::WeakBuy,
            s if s <= -6 => Recommendation::StrongSell,
            s if s <= -3 => Recommendation::Sell,
            s if s <= -1 => Recommendation::WeakSell,
            _ => Recommendation::Wait,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG BUY",
            Recommendation::Buy => "BUY",
            Recommendation::WeakBuy => "WEAK BUY",
            Recommendation::Wait => "WAIT",
            Recommendation::WeakSell => "WEAK SELL",
            Recommendation::Sell => "SELL",
            Recommendation::StrongSell => "STRONG SELL",
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            Recommendation::StrongBuy | Recommendation::StrongSell => Confidence::High,
            Recommendation::Buy | Recommendation::Sell => Confidence::Medium,
            Recommendation::WeakBuy | Recommendation::WeakSell => Confidence::Low,
            Recommendation::Wait => Confidence::None,
        }
    }

    /// Position size before any warning adjustment.
    pub fn position_size(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "100%",
            Recommendation::Buy => "50-75%",
            Recommendation::WeakBuy => "25%",
            Recommendation::Wait => "0% (Stay in cash)",
            Recommendation::WeakSell => "Consider Exit",
            Recommendation::Sell => "Exit 50-75%",
            Recommendation::StrongSell => "Exit 100%",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "🟢🟢🟢",
            Recommendation::Buy => "🟢🟢",
            Recommendation::WeakBuy => "🟢",
            Recommendation::Wait => "⏸️",
            Recommendation::WeakSell => "🔴",
            Recommendation::Sell => "🔴🔴",
            Recommendation::StrongSell => "🔴🔴🔴",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            Recommendation::StrongBuy | Recommendation::Buy | Recommendation::WeakBuy
        )
    }

    pub fn is_sell(&self) -> bool {
        matches!(
            self,
            Recommendation::StrongSell | Recommendation::Sell | Recommendation::WeakSell
        )
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conviction attached to a recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
    None,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
            Confidence::None => "NONE",
        }
    }
}

/// Recommendation tier with its sizing and rationale text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecommendation {
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub position_size: String,
    pub emoji: String,
    pub reason: String,
}

/// Complete result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub snapshot: IndicatorSnapshot,
    pub pattern_result: PatternResult,
    pub score: i32,
    pub breakdown: Vec<BreakdownEntry>,
    pub warnings: Vec<Warning>,
    pub recommendation: TradeRecommendation,
    pub suggested_actions: Vec<String>,
    pub tips: Vec<String>,
}
