//! Types command implementation.
//!
//! Prints every wired resource kind with its canonical type element.

use crate::registry::TypeRegistry;
use crate::types::ResourceType;

pub fn run(registry: &TypeRegistry) {
    for line in type_lines(registry) {
        println!("{}", line);
    }
}

fn type_lines(registry: &TypeRegistry) -> Vec<String> {
    registry.types().map(|kind| format!("{:<14} {}", kind.token(), element(kind))).collect()
}

fn element(kind: ResourceType) -> String {
    match kind.element() {
        (tag, Some(subtype)) => format!("<{} type=\"{}\">", tag, subtype),
        (tag, None) => format!("<{}>", tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lines() {
        let lines = type_lines(TypeRegistry::standard());
        assert_eq!(
            lines,
            vec![
                "CHOICE_SCENE   <scene type=\"choice\">",
                "END_SCENE      <scene type=\"end\">",
                "STORY          <story>",
                "ACHIEVEMENT    <achievement>",
            ]
        );
    }

    #[test]
    fn test_empty_registry_prints_nothing() {
        assert!(type_lines(&TypeRegistry::new()).is_empty());
    }
}
