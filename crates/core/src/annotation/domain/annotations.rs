use imageproc::point::Point;

use crate::shared::constants::{
    LABEL_SCALE, LABEL_THICKNESS, OUTLINE_THICKNESS, SUM_LABEL_ORIGIN, SUM_LABEL_THICKNESS,
};
use crate::shared::die_candidate::DieCandidate;

/// A deferred drawing operation, applied to a copy of the image at the end
/// of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Closed polyline through `points`.
    Outline { points: Vec<Point<i32>>, thickness: u32 },
    /// Text whose baseline starts at `origin`.
    Label {
        origin: (i32, i32),
        text: String,
        scale: f32,
        thickness: u32,
    },
}

/// Per-die draw commands and the running pip total for one image.
///
/// Built by folding over `(die, pip_count)` pairs so counting never touches
/// pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotations {
    commands: Vec<DrawCommand>,
    counts: Vec<usize>,
    total: usize,
}

impl Annotations {
    pub fn tally<'a, I>(dice: I) -> Self
    where
        I: IntoIterator<Item = (&'a DieCandidate, usize)>,
    {
        dice.into_iter()
            .fold(Self::default(), |acc, (die, pips)| acc.with_die(die, pips))
    }

    /// Records the outline and pip-count label for one die.
    pub fn with_die(mut self, die: &DieCandidate, pips: usize) -> Self {
        self.commands.push(DrawCommand::Outline {
            points: die.boundary.clone(),
            thickness: OUTLINE_THICKNESS,
        });
        self.commands.push(DrawCommand::Label {
            origin: die.label_origin(),
            text: pips.to_string(),
            scale: LABEL_SCALE,
            thickness: LABEL_THICKNESS,
        });
        self.counts.push(pips);
        self.total += pips;
        self
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Pip counts in processing order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// All commands to render, ending with the `Sum: <total>` label.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = self.commands.clone();
        commands.push(sum_label(self.total));
        commands
    }
}

pub fn sum_label(total: usize) -> DrawCommand {
    DrawCommand::Label {
        origin: SUM_LABEL_ORIGIN,
        text: format!("Sum: {total}"),
        scale: LABEL_SCALE,
        thickness: SUM_LABEL_THICKNESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn die(x: i32, y: i32) -> DieCandidate {
        DieCandidate {
            boundary: vec![
                Point::new(x, y),
                Point::new(x + 40, y),
                Point::new(x + 40, y + 40),
                Point::new(x, y + 40),
            ],
            area: 1600.0,
            center: (x + 20, y + 20),
            width: 40,
            height: 40,
        }
    }

    #[rstest]
    #[case::no_dice(vec![])]
    #[case::one_die(vec![4])]
    #[case::pair(vec![3, 5])]
    #[case::many(vec![1, 2, 3, 4, 5, 6, 6])]
    #[case::implausible_counts(vec![0, 11])]
    fn test_total_is_sum_of_counts(#[case] counts: Vec<usize>) {
        let dice: Vec<DieCandidate> = (0..counts.len()).map(|i| die(i as i32 * 50, 0)).collect();
        let annotations = Annotations::tally(dice.iter().zip(counts.iter().copied()));
        assert_eq!(annotations.total(), counts.iter().sum::<usize>());
        assert_eq!(annotations.counts(), counts.as_slice());
    }

    #[test]
    fn test_zero_dice_only_draws_sum() {
        let annotations = Annotations::tally(std::iter::empty());
        assert_eq!(annotations.draw_commands(), vec![sum_label(0)]);
    }

    #[test]
    fn test_sum_label_layout() {
        match sum_label(8) {
            DrawCommand::Label {
                origin,
                text,
                scale,
                thickness,
            } => {
                assert_eq!(origin, (25, 50));
                assert_eq!(text, "Sum: 8");
                assert_eq!(scale, 1.75);
                assert_eq!(thickness, 4);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn test_each_die_gets_outline_then_label() {
        let d = die(100, 60);
        let commands = Annotations::default().with_die(&d, 5).draw_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::Outline {
                points: d.boundary.clone(),
                thickness: 3
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Label {
                origin: (140, 100),
                text: "5".to_string(),
                scale: 1.75,
                thickness: 3,
            }
        );
        assert_eq!(commands[2], sum_label(5));
    }

    #[test]
    fn test_fold_preserves_processing_order() {
        let dice = [die(0, 0), die(100, 0)];
        let annotations = Annotations::tally(dice.iter().zip([6, 1]));
        let labels: Vec<String> = annotations
            .draw_commands()
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Label { text, .. } => Some(text),
                DrawCommand::Outline { .. } => None,
            })
            .collect();
        assert_eq!(labels, vec!["6", "1", "Sum: 7"]);
    }
}
