//! ASCII gallows, one drawing per lives-lost stage.

/// Number of drawings; stage 0 is the empty gallows, the last is a full figure.
pub const GALLOWS_STAGES: usize = 7;

const GALLOWS: [[&str; 7]; GALLOWS_STAGES] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "=========",
    ],
];

/// Drawing index for `lives_lost` out of `max_lives`.
///
/// Scales to the number of drawings so the figure is complete exactly when
/// no lives remain, whatever the starting count.
pub fn gallows_stage(lives_lost: u32, max_lives: u32) -> usize {
    let last = GALLOWS_STAGES - 1;
    if lives_lost >= max_lives {
        return last;
    }
    let lost = u64::from(lives_lost);
    let max = u64::from(max_lives);
    // Round up so any lost life shows at least the head.
    let stage = (lost * last as u64).div_ceil(max) as usize;
    stage.min(last - 1)
}

pub fn gallows_lines(stage: usize) -> &'static [&'static str; 7] {
    &GALLOWS[stage.min(GALLOWS_STAGES - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_lives_map_one_to_one() {
        for lost in 0..=6 {
            assert_eq!(gallows_stage(lost, 6), lost as usize);
        }
    }

    #[test]
    fn stage_is_complete_only_at_zero_lives() {
        for max in 1..=12 {
            assert_eq!(gallows_stage(0, max), 0);
            assert_eq!(gallows_stage(max, max), GALLOWS_STAGES - 1);
            if max > 1 {
                assert!(gallows_stage(max - 1, max) < GALLOWS_STAGES - 1);
            }
            assert!(gallows_stage(1, max) >= 1);
        }
    }

    #[test]
    fn lines_clamp_stage() {
        assert_eq!(gallows_lines(99), gallows_lines(GALLOWS_STAGES - 1));
        assert!(gallows_lines(0).iter().all(|l| !l.contains('O')));
        assert!(gallows_lines(1)[2].contains('O'));
    }
}
