use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EmotionEntry, HexColor};
use crate::error::{MoodError, MoodResult};

/// Emotion record as it arrives from storage or an upstream analyzer.
///
/// Every field is optional; `normalize_records` decides what survives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEmotionRecord {
    #[serde(default, alias = "label", alias = "name")]
    pub emotion: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_intensity")]
    pub intensity: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

impl RawEmotionRecord {
    #[must_use]
    pub fn new(emotion: impl Into<String>, intensity: f64) -> Self {
        Self {
            emotion: Some(emotion.into()),
            intensity: Some(intensity),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Label-to-color lookup used when a record carries no usable color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPalette {
    colors: IndexMap<String, HexColor>,
    fallback: HexColor,
}

impl Default for EmotionPalette {
    fn default() -> Self {
        let colors = [
            ("joy", HexColor::rgb(0xFF, 0xD7, 0x00)),
            ("happiness", HexColor::rgb(0xFF, 0xD7, 0x00)),
            ("calm", HexColor::rgb(0x87, 0xCE, 0xEB)),
            ("love", HexColor::rgb(0xFF, 0x69, 0xB4)),
            ("gratitude", HexColor::rgb(0x34, 0xD3, 0x99)),
            ("surprise", HexColor::rgb(0xF5, 0x9E, 0x0B)),
            ("sadness", HexColor::rgb(0x60, 0xA5, 0xFA)),
            ("fear", HexColor::rgb(0x8B, 0x5C, 0xF6)),
            ("anxiety", HexColor::rgb(0xA7, 0x8B, 0xFA)),
            ("anger", HexColor::rgb(0xEF, 0x44, 0x44)),
            ("disgust", HexColor::rgb(0x84, 0xCC, 0x16)),
            ("neutral", HexColor::NEUTRAL),
        ]
        .into_iter()
        .map(|(label, color)| (label.to_owned(), color))
        .collect();

        Self {
            colors,
            fallback: HexColor::NEUTRAL,
        }
    }
}

impl EmotionPalette {
    /// Palette without named colors; every lookup yields `fallback`.
    #[must_use]
    pub fn empty(fallback: HexColor) -> Self {
        Self {
            colors: IndexMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with_color(mut self, label: &str, color: HexColor) -> Self {
        self.colors.insert(label.trim().to_lowercase(), color);
        self
    }

    /// Case-insensitive lookup with neutral fallback.
    #[must_use]
    pub fn color_for(&self, label: &str) -> HexColor {
        self.colors
            .get(&label.trim().to_lowercase())
            .copied()
            .unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> HexColor {
        self.fallback
    }
}

/// Maps any intensity onto the integer percent scale.
///
/// Non-finite values become 0; the rest are clamped to `[0, 100]` and rounded.
#[must_use]
pub fn sanitize_intensity(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    // clamped before the cast
    (value.clamp(0.0, 100.0) + 0.5).floor() as u8
}

/// Validates loosely-shaped records into layout input.
///
/// Records without a label or intensity are dropped. Colors that are missing
/// or unparsable come from `palette`. Order is preserved; an empty result is
/// replaced by the single "No Data" placeholder.
#[must_use]
pub fn normalize_records(
    records: &[RawEmotionRecord],
    palette: &EmotionPalette,
) -> Vec<EmotionEntry> {
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Some(label) = record
            .emotion
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
        else {
            debug!(index, "dropping emotion record without label");
            continue;
        };
        let Some(intensity) = record.intensity else {
            debug!(index, label, "dropping emotion record without intensity");
            continue;
        };

        let color = match record.color.as_deref().map(HexColor::parse) {
            Some(Ok(color)) => color,
            Some(Err(err)) => {
                debug!(index, label, error = %err, "falling back to palette color");
                palette.color_for(label)
            }
            None => palette.color_for(label),
        };

        match EmotionEntry::new(label, sanitize_intensity(intensity), color) {
            Ok(entry) => entries.push(entry),
            Err(err) => debug!(index, error = %err, "dropping invalid emotion record"),
        }
    }

    with_placeholder(entries)
}

/// Normalizes the `label -> intensity` map form, keeping insertion order.
#[must_use]
pub fn normalize_intensity_map(
    intensities: &IndexMap<String, f64>,
    palette: &EmotionPalette,
) -> Vec<EmotionEntry> {
    let records: Vec<RawEmotionRecord> = intensities
        .iter()
        .map(|(label, intensity)| RawEmotionRecord::new(label.clone(), *intensity))
        .collect();
    normalize_records(&records, palette)
}

/// Normalizes a JSON emotions payload.
///
/// Accepted shapes: an array of records, a `label -> intensity` object, or
/// an envelope object with an `emotions` field holding either. `null`, empty
/// input and `{"emotions": null}` yield the placeholder.
pub fn normalize_json(input: &str, palette: &EmotionPalette) -> MoodResult<Vec<EmotionEntry>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(with_placeholder(Vec::new()));
    }

    let parsed: Option<JsonEmotions> = serde_json::from_str(trimmed)
        .map_err(|e| MoodError::InvalidData(format!("failed to parse emotions json: {e}")))?;

    let payload = match parsed {
        None => None,
        Some(JsonEmotions::Payload(payload)) => Some(payload),
        Some(JsonEmotions::Envelope(envelope)) => match envelope.emotions {
            NullablePayload::Null(()) => None,
            NullablePayload::Present(payload) => Some(payload),
        },
    };

    Ok(match payload {
        None => with_placeholder(Vec::new()),
        Some(EmotionsPayload::Records(records)) => normalize_records(&records, palette),
        Some(EmotionsPayload::Map(map)) => {
            let intensities = map
                .into_iter()
                .map(|(label, LenientNumber(value))| (label, value))
                .collect();
            normalize_intensity_map(&intensities, palette)
        }
    })
}

fn with_placeholder(entries: Vec<EmotionEntry>) -> Vec<EmotionEntry> {
    if entries.is_empty() {
        vec![EmotionEntry::no_data()]
    } else {
        entries
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEmotions {
    Payload(EmotionsPayload),
    Envelope(EmotionsEnvelope),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EmotionsPayload {
    Records(Vec<RawEmotionRecord>),
    Map(IndexMap<String, LenientNumber>),
}

/// Wrapper such as the fetch response body; `emotions` must be present.
#[derive(Deserialize)]
struct EmotionsEnvelope {
    emotions: NullablePayload,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NullablePayload {
    Null(()),
    Present(EmotionsPayload),
}

/// Number that may also arrive as a numeric string.
struct LenientNumber(f64);

impl<'de> Deserialize<'de> for LenientNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientNumberVisitor).map(LenientNumber)
    }
}

struct LenientNumberVisitor;

impl Visitor<'_> for LenientNumberVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        value
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

fn deserialize_lenient_intensity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LenientNumber>::deserialize(deserializer).map(|value| value.map(|number| number.0))
}
