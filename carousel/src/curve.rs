use alloc::vec::Vec;

/// A control point of a [`Curve`].
///
/// Tangents are slopes (`dy/dx`). `in_tangent` shapes the segment ending at this key,
/// `out_tangent` the segment starting at it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    pub x: f32,
    pub y: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    /// A key with flat tangents.
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub const fn with_tangents(x: f32, y: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            x,
            y,
            in_tangent,
            out_tangent,
        }
    }
}

/// A piecewise cubic Hermite curve mapping a scalar input to a scalar output.
///
/// Evaluation rules:
/// - no keys: `0.0` everywhere
/// - inputs at or before the first key return the first key's `y`; at or after the last key,
///   the last key's `y` (flat clamp, tangents are not extrapolated)
/// - between keys: cubic Hermite interpolation using the adjacent tangents
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    /// Builds a curve from keys in any order (they are sorted by `x`).
    pub fn new(keys: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut keys: Vec<Keyframe> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { keys }
    }

    /// A curve through `points` with flat tangents (smooth ease between keys).
    pub fn smooth(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self::new(points.into_iter().map(|(x, y)| Keyframe::new(x, y)))
    }

    /// A curve that interpolates linearly between `points`.
    pub fn linear(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut curve = Self::smooth(points);
        for i in 1..curve.keys.len() {
            let (a, b) = (curve.keys[i - 1], curve.keys[i]);
            let dx = b.x - a.x;
            let slope = if dx > 0.0 { (b.y - a.y) / dx } else { 0.0 };
            curve.keys[i - 1].out_tangent = slope;
            curve.keys[i].in_tangent = slope;
        }
        curve
    }

    /// A constant curve.
    pub fn constant(y: f32) -> Self {
        Self::new([Keyframe::new(0.0, y)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Inserts a key, keeping keys sorted by `x`.
    pub fn add_key(&mut self, key: Keyframe) {
        let at = self.keys.partition_point(|k| k.x <= key.x);
        self.keys.insert(at, key);
    }

    pub fn evaluate(&self, x: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }

        // first.x < x < last.x, so 1 <= hi < len.
        let hi = self.keys.partition_point(|k| k.x <= x);
        let a = self.keys[hi - 1];
        let b = self.keys[hi];
        hermite(a, b, x)
    }
}

fn hermite(a: Keyframe, b: Keyframe, x: f32) -> f32 {
    let dx = b.x - a.x;
    if dx <= 0.0 {
        return b.y;
    }
    let t = (x - a.x) / dx;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    let m0 = a.out_tangent * dx;
    let m1 = b.in_tangent * dx;
    h00 * a.y + h10 * m0 + h01 * b.y + h11 * m1
}
