//! Construction protocol: an ordered sequence of validated configuration
//! steps folded over a zeroed record.
//!
//! Every numeric step runs the same bound check before the mask/clear/set
//! sequence touches the word. A rejected step is skipped with a warning and
//! construction continues; the caller always receives a completed record.

use tracing::warn;

use crate::error::RecordError;
use crate::layout::{
    EXPERIENCE, EXPERIENCE_MAX, FAMILY, GOLD, GOLD_MAX, GUN, HEALTH, HEALTH_MAX, HOUSE, KIND,
    KIND_MAX, LEVEL, LEVEL_MAX, MANA, MANA_MAX, RESPECT, RESPECT_MAX, STRENGTH, STRENGTH_MAX,
};
use crate::record::{PersonRecord, Profession};

/// One unit of validated mutation applied during record construction.
///
/// A step either mutates exactly its own sub-field(s), leaving all other bits
/// untouched, or is rejected whole when its value is out of range. The flag
/// steps are unconditional: they set their bit and there is no unset.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Copies at most 42 bytes of the text; longer input is silently
    /// truncated.
    Name(String),
    Coordinates { x: i32, y: i32, z: i32 },
    Gold(u32),
    Mana(u32),
    Health(u32),
    Respect(u32),
    Strength(u32),
    Experience(u32),
    Level(u8),
    House,
    Gun,
    Family,
    /// Raw kind value, 0..=3. The unnamed value 3 is accepted as stored.
    Kind(u8),
}

impl Step {
    /// Applies the step to `record`, validating before any bit moves.
    pub fn try_apply(self, record: &mut PersonRecord) -> Result<(), RecordError> {
        match self {
            Step::Name(text) => record.set_name(&text),
            Step::Coordinates { x, y, z } => record.set_coordinates(x, y, z),
            Step::Gold(v) => record.set_head(GOLD, checked("gold", v as u64, GOLD_MAX)?),
            Step::Mana(v) => record.set_head(MANA, checked("mana", v as u64, MANA_MAX)?),
            Step::Health(v) => record.set_head(HEALTH, checked("health", v as u64, HEALTH_MAX)?),
            Step::Respect(v) => {
                record.set_head(RESPECT, checked("respect", v as u64, RESPECT_MAX)?)
            }
            Step::Strength(v) => {
                record.set_head(STRENGTH, checked("strength", v as u64, STRENGTH_MAX)?)
            }
            Step::Experience(v) => {
                record.set_head(EXPERIENCE, checked("experience", v as u64, EXPERIENCE_MAX)?)
            }
            Step::Level(v) => record.set_tail(LEVEL, checked("level", v as u64, LEVEL_MAX)?),
            Step::House => record.set_tail_flag(HOUSE),
            Step::Gun => record.set_tail_flag(GUN),
            Step::Family => record.set_tail_flag(FAMILY),
            Step::Kind(v) => record.set_tail(KIND, checked("kind", v as u64, KIND_MAX)?),
        }
        Ok(())
    }
}

impl From<Profession> for Step {
    fn from(kind: Profession) -> Self {
        Step::Kind(kind as u8)
    }
}

/// Bound check shared by every numeric step.
fn checked(field: &'static str, value: u64, max: u64) -> Result<u64, RecordError> {
    if value > max {
        return Err(RecordError::OutOfRange { field, value, max });
    }
    Ok(value)
}

impl PersonRecord {
    /// Builds a record by applying `steps` strictly in order to a zeroed
    /// record.
    ///
    /// An out-of-range step is reported and skipped; it never aborts
    /// construction or corrupts unrelated fields.
    pub fn build<I>(steps: I) -> PersonRecord
    where
        I: IntoIterator<Item = Step>,
    {
        let mut record = PersonRecord::zeroed();
        for step in steps {
            if let Err(err) = step.try_apply(&mut record) {
                warn!(error = %err, "configuration step rejected");
            }
        }
        record
    }
}

/// Fluent step collector, for callers assembling a record incrementally.
///
/// ```rust
/// use game_person::{RecordBuilder, Step};
///
/// let person = RecordBuilder::new()
///     .step(Step::Name("Astrid".into()))
///     .step(Step::Level(3))
///     .step(Step::Family)
///     .build();
///
/// assert_eq!(person.level(), 3);
/// assert!(person.has_family());
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    steps: Vec<Step>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps<I: IntoIterator<Item = Step>>(mut self, steps: I) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn build(self) -> PersonRecord {
        PersonRecord::build(self.steps)
    }
}
