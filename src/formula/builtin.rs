use crate::formula::Formula;

/// Returns the predefined physics formulas, in display order.
///
/// | Name | Expression | Unit |
/// |------|------------|------|
/// | Final Velocity (v = u + at) | `u + a*t` | m/s |
/// | Force (F = ma) | `m*a` | N |
/// | Kinetic Energy (KE = ½mv²) | `0.5*m*v^2` | J |
/// | Potential Energy (PE = mgh) | `m*g*h` | J |
#[must_use]
pub fn builtin_formulas() -> Vec<Formula> {
    vec![Formula::new("Final Velocity (v = u + at)", ["u", "a", "t"], "u + a*t")
         .with_labels(["Initial Velocity (u)", "Acceleration (a)", "Time (t)"])
         .with_result("Final Velocity", "m/s"),
         Formula::new("Force (F = ma)", ["m", "a"], "m*a")
         .with_labels(["Mass (m)", "Acceleration (a)"])
         .with_result("Force", "N"),
         Formula::new("Kinetic Energy (KE = ½mv²)", ["m", "v"], "0.5*m*v^2")
         .with_labels(["Mass (m)", "Velocity (v)"])
         .with_result("Kinetic Energy", "J"),
         Formula::new("Potential Energy (PE = mgh)", ["m", "g", "h"], "m*g*h")
         .with_labels(["Mass (m)", "Gravity (g)", "Height (h)"])
         .with_result("Potential Energy", "J"),]
}
