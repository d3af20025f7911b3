use crate::Energy;
use crate::Tag;

/// Carried state for a single observation between iterations:
/// the cluster it is tagged with and its recorded distance to that centroid.
///
/// The error is only ever lowered, by [`Assignment::witness`], so it may lag
/// behind the true distance after its centroid moves away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    /// Index into the centroid set.
    pub j: Tag,
    /// Distance to centroid `j` when it was last witnessed.
    pub error: Energy,
}

impl Assignment {
    pub fn j(&self) -> Tag {
        self.j
    }
    pub fn error(&self) -> Energy {
        self.error
    }

    /// Offer centroid `j` at `distance`. Takes it only on strict improvement,
    /// so the earliest index wins ties. Returns whether the offer was taken.
    pub fn witness(&mut self, j: Tag, distance: Energy) -> bool {
        if distance < self.error {
            self.j = j;
            self.error = distance;
            true
        } else {
            false
        }
    }
}

impl From<(Tag, Energy)> for Assignment {
    fn from((j, error): (Tag, Energy)) -> Self {
        Self { j, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_witness_take_strict_improvement() {
        let mut a = Assignment::from((0, 1.0));
        assert!(a.witness(2, 0.5));
        assert_eq!((a.j(), a.error()), (2, 0.5));
    }
    #[test]
    fn does_witness_reject_tie() {
        let mut a = Assignment::from((1, 0.5));
        assert!(!a.witness(0, 0.5));
        assert_eq!(a.j(), 1);
    }
    #[test]
    fn does_witness_reject_worse() {
        let mut a = Assignment::from((1, 0.5));
        assert!(!a.witness(0, 0.75));
        assert_eq!((a.j(), a.error()), (1, 0.5));
    }
}
