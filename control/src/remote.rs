//! Translation of raw remote codes into logical keys.
//!
//! The receiver hands over NEC frames as 32-bit values. Two remote models
//! are supported, each with its own codes. Codes of both map to the same
//! logical keys and are fully interchangeable.

use crate::key::LogicalKey;
use crate::state::InputChannel;

/// Code sent by the receiver while a button stays held.
pub const REPEAT_CODE: u32 = 0xFFFF_FFFF;

/// Pairs of raw code and the key it stands for.
pub type CodeTable = [(u32, LogicalKey)];

/// Remote shipped with the amplifier.
pub const REMOTE_A: &CodeTable = &[
    (83_574_975, LogicalKey::VolumeUp),
    (83_595_375, LogicalKey::VolumeDown),
    (83_616_285, LogicalKey::BassUp),
    (83_604_045, LogicalKey::BassDown),
    (83_612_205, LogicalKey::TrebleUp),
    (83_595_885, LogicalKey::TrebleDown),
    (83_610_165, LogicalKey::Mute),
    (83_622_405, LogicalKey::InputSelect),
    (83_573_445, LogicalKey::SelectInput(InputChannel::Aux)),
    (83_606_085, LogicalKey::SelectInput(InputChannel::Pc)),
    (83_589_765, LogicalKey::SelectInput(InputChannel::Bluetooth)),
];

/// Generic replacement remote. It has no cycling input button.
pub const REMOTE_B: &CodeTable = &[
    (2_155_813_095, LogicalKey::VolumeUp),
    (2_155_809_015, LogicalKey::VolumeDown),
    (2_155_815_135, LogicalKey::BassUp),
    (2_155_831_965, LogicalKey::BassDown),
    (2_155_811_055, LogicalKey::TrebleUp),
    (2_155_827_885, LogicalKey::TrebleDown),
    (2_155_807_485, LogicalKey::Mute),
    (2_155_836_045, LogicalKey::SelectInput(InputChannel::Aux)),
    (2_155_851_855, LogicalKey::SelectInput(InputChannel::Pc)),
];

/// Translate raw code using given tables.
///
/// This is total: the repeat code becomes `Repeat`, codes missing from all
/// the tables become `Undefined`.
#[must_use]
pub fn translate(code: u32, tables: &[&CodeTable]) -> LogicalKey {
    if code == REPEAT_CODE {
        return LogicalKey::Repeat;
    }

    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(c, _)| *c == code)
        .map_or(LogicalKey::Undefined, |(_, key)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &[&CodeTable] = &[REMOTE_A, REMOTE_B];

    #[test]
    fn repeat_code_translates_to_repeat() {
        assert_eq!(translate(REPEAT_CODE, TABLES), LogicalKey::Repeat);
        assert_eq!(translate(4_294_967_295, TABLES), LogicalKey::Repeat);
    }

    #[test]
    fn codes_of_both_remotes_translate_to_the_same_key() {
        assert_eq!(translate(83_574_975, TABLES), LogicalKey::VolumeUp);
        assert_eq!(translate(2_155_813_095, TABLES), LogicalKey::VolumeUp);
        assert_eq!(translate(83_610_165, TABLES), LogicalKey::Mute);
        assert_eq!(translate(2_155_807_485, TABLES), LogicalKey::Mute);
    }

    #[test]
    fn unknown_code_translates_to_undefined() {
        assert_eq!(translate(0, TABLES), LogicalKey::Undefined);
        assert_eq!(translate(12_345, TABLES), LogicalKey::Undefined);
    }

    #[test]
    fn codes_of_a_table_not_given_are_undefined() {
        assert_eq!(translate(2_155_813_095, &[REMOTE_A]), LogicalKey::Undefined);
    }

    #[test]
    fn repeat_code_is_recognized_even_without_tables() {
        assert_eq!(translate(REPEAT_CODE, &[]), LogicalKey::Repeat);
    }

    #[test]
    fn no_code_appears_twice() {
        let codes = TABLES.iter().flat_map(|t| t.iter()).map(|(c, _)| *c);
        for (i, a) in codes.clone().enumerate() {
            assert_ne!(a, REPEAT_CODE);
            for b in codes.clone().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
