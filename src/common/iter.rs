use crate::common::metadata::Version;

// Iterator over the encoding region module path
//------------------------------------------------------------------------------

// Codeword bits fill the symbol in two module wide column pairs, right to
// left. Within a pair the walk alternates between upward and downward
// passes, visiting the right cell of each row before the left one. The
// vertical timing column never hosts data, so the pairs shift past it; for
// Micro symbols that column is fully reserved, which makes dropping it
// equivalent to walking through it without placing anything
pub struct EncRegionIter {
    width: i16,
    vert_timing_col: i16,
    // Right column of the active pair; negative once the walk is done
    right_col: i16,
    row: i16,
    on_right: bool,
    upward: bool,
}

impl EncRegionIter {
    pub fn new(version: Version) -> Self {
        let width = version.width() as i16;
        let vert_timing_col = match version {
            Version::Micro(_) => 0,
            Version::Normal(_) => 6,
        };
        Self {
            width,
            vert_timing_col,
            right_col: width - 1,
            row: width - 1,
            on_right: true,
            upward: true,
        }
    }

    // A finished pass turns around on the row it ended on
    fn advance_pair(&mut self) {
        self.right_col -= 2;
        if self.right_col == self.vert_timing_col {
            self.right_col -= 1;
        }
        self.upward = !self.upward;
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.right_col < 0 {
            return None;
        }
        let col = if self.on_right { self.right_col } else { self.right_col - 1 };
        let res = (self.row, col);

        if self.on_right {
            self.on_right = false;
        } else {
            self.on_right = true;
            let at_edge = self.row == if self.upward { 0 } else { self.width - 1 };
            if at_edge {
                self.advance_pair();
            } else {
                self.row += if self.upward { -1 } else { 1 };
            }
        }
        Some(res)
    }
}

#[cfg(test)]
mod iter_tests {
    use super::EncRegionIter;
    use crate::common::metadata::Version;

    #[test]
    fn test_path_starts_bottom_right_and_zigzags_up() {
        let mut coords = EncRegionIter::new(Version::Normal(1));
        assert_eq!(coords.next(), Some((20, 20)));
        assert_eq!(coords.next(), Some((20, 19)));
        assert_eq!(coords.next(), Some((19, 20)));
        assert_eq!(coords.next(), Some((19, 19)));
    }

    #[test]
    fn test_path_turns_around_at_the_top() {
        let coords = EncRegionIter::new(Version::Normal(1)).collect::<Vec<_>>();
        let top = coords.iter().position(|&c| c == (0, 19)).unwrap();
        assert_eq!(coords[top + 1..=top + 3], [(0, 18), (0, 17), (1, 18)]);
    }

    #[test]
    fn test_path_shifts_past_vertical_timing_column() {
        let coords = EncRegionIter::new(Version::Normal(1)).collect::<Vec<_>>();
        let last_before = coords.iter().position(|&c| c == (0, 7)).unwrap();
        assert_eq!(coords[last_before + 1..=last_before + 2], [(0, 5), (0, 4)]);
    }

    #[test]
    fn test_path_skips_vertical_timing_column() {
        for v in [Version::Normal(1), Version::Normal(7), Version::Normal(40)] {
            assert!(EncRegionIter::new(v).all(|(_, c)| c != 6));
        }
        for v in 1..=4 {
            assert!(EncRegionIter::new(Version::Micro(v)).all(|(_, c)| c != 0));
        }
    }

    #[test]
    fn test_path_visits_every_module_once() {
        for v in 1..=40 {
            let version = Version::Normal(v);
            let w = version.width();
            let visited = EncRegionIter::new(version).collect::<Vec<_>>();
            assert_eq!(visited.len(), w * (w - 1));
            let mut unique = visited.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), visited.len());
        }
        for v in 1..=4 {
            let version = Version::Micro(v);
            let w = version.width();
            assert_eq!(EncRegionIter::new(version).count(), w * (w - 1));
        }
    }
}
