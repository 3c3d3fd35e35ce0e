use crate::shared::rect::{contains, Rect};

/// A face together with the eyes found inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EyeGroup {
    pub face: Rect,
    pub eyes: Vec<Rect>,
}

impl EyeGroup {
    pub fn has_eyes(&self) -> bool {
        !self.eyes.is_empty()
    }
}

/// Links eye boxes to face boxes by geometric containment.
///
/// The detector reports each class independently, so containment is the only
/// relation between an eye and "its" face. Results are derived fresh from the
/// inputs on every call and never cached.
pub struct RegionAssociator;

impl RegionAssociator {
    /// One group per face, in face order. Each group lists the eyes the face
    /// contains, in eye order; faces without eyes still get a group.
    ///
    /// An eye inside two overlapping faces appears in both groups.
    pub fn associate_eyes_to_faces(faces: &[Rect], eyes: &[Rect]) -> Vec<EyeGroup> {
        faces
            .iter()
            .map(|face| EyeGroup {
                face: *face,
                eyes: eyes
                    .iter()
                    .filter(|eye| contains(eye, face))
                    .copied()
                    .collect(),
            })
            .collect()
    }

    /// The eye to magnify.
    ///
    /// First eye (in eye order) inside the first face that contains any eye;
    /// if no face contains an eye, the first eye reported at all. `None` only
    /// when there are no eyes.
    pub fn select_primary_eye(faces: &[Rect], eyes: &[Rect]) -> Option<Rect> {
        faces
            .iter()
            .find_map(|face| eyes.iter().find(|eye| contains(eye, face)))
            .or_else(|| eyes.first())
            .copied()
    }
}
