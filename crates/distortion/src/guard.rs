use crate::tunables::Tunables;
use crate::types::PrincipalStretches;

/// Final admissibility check before a sample becomes a descriptor: both
/// stretch scales must be finite and inside the plausibility ceiling.
/// Run-away values here mean the differencing happened next to near-singular
/// geometry.
pub fn admit(s: &PrincipalStretches, tun: &Tunables) -> bool {
    s.major_scale.is_finite()
        && s.minor_scale.is_finite()
        && s.major_scale <= tun.scale_ceiling
        && s.minor_scale <= tun.scale_ceiling
}
