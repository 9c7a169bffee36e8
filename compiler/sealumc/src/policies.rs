//! Artifact names per traversal policy, as shown by `sealum policies`.

use std::fmt::Write as _;

use sealum_ir::{ArtifactNames, DeclName, TraversalPolicy, UnknownTraversalPolicy, Visibility};

/// Describe the artifacts generated for `root` under every policy, or only
/// under the policy `tag` names.
pub fn describe_policies(
    root: &DeclName,
    tag: Option<&str>,
) -> Result<String, UnknownTraversalPolicy> {
    let selected = match tag {
        Some(tag) => vec![tag.parse::<TraversalPolicy>()?],
        None => TraversalPolicy::ALL.to_vec(),
    };

    let mut out = String::new();
    for policy in selected {
        let names = ArtifactNames::for_policy(root, policy, Visibility::Public);
        let default = if policy == TraversalPolicy::default() {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(out, "{policy}{default}");
        let _ = writeln!(out, "  sealed enum:  {}", names.sealed_enum);
        let _ = writeln!(out, "  values:       {}", names.values_accessor);
        let _ = writeln!(out, "  value of:     {}", names.value_of_fn);
        let _ = writeln!(out, "  enum type:    {}", names.enum_type);
    }
    Ok(out)
}
