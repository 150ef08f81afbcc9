//! Selectors and binding declarations.
//!
//! The graph is built once at startup and never mutated. Construction checks
//! the wiring invariants: every output has exactly one binding, every input a
//! binding reads is a declared selector, and every selector default is one of
//! its options.

use crate::{
    error::{BindingError, Result},
    slot::{InputId, OutputId},
};
use climate_views::View;
use std::collections::{HashMap, HashSet};

/// Recomputes one output from the shared data and the current values of the
/// binding's inputs, passed in declaration order.
pub type UpdateFn<D> = fn(&D, &[&str]) -> View;

/// A control with a closed set of options and a startup default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    id: InputId,
    options: Vec<&'static str>,
    default: &'static str,
}

impl Selector {
    pub fn new(id: InputId, options: Vec<&'static str>, default: &'static str) -> Self {
        Selector {
            id,
            options,
            default,
        }
    }

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    pub fn default_value(&self) -> &'static str {
        self.default
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|o| *o == value)
    }
}

/// Output slot id, the inputs it reads and the function that recomputes it.
/// A binding with no inputs is a static output, rendered once per session.
pub struct Binding<D> {
    output: OutputId,
    inputs: Vec<InputId>,
    update: UpdateFn<D>,
}

impl<D> Binding<D> {
    pub fn output(&self) -> OutputId {
        self.output
    }

    pub fn inputs(&self) -> &[InputId] {
        &self.inputs
    }

    pub fn update(&self) -> UpdateFn<D> {
        self.update
    }
}

/// Static wiring from selectors to output slots.
pub struct BindingGraph<D> {
    selectors: Vec<Selector>,
    bindings: Vec<Binding<D>>,
    /// input -> indices into `bindings`, in declaration order
    dependents: HashMap<InputId, Vec<usize>>,
}

impl<D> BindingGraph<D> {
    pub fn builder() -> BindingGraphBuilder<D> {
        BindingGraphBuilder {
            selectors: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn selector(&self, input: InputId) -> Option<&Selector> {
        self.selectors.iter().find(|s| s.id == input)
    }

    /// All bindings in declaration order.
    pub fn bindings(&self) -> &[Binding<D>] {
        &self.bindings
    }

    pub fn binding(&self, output: OutputId) -> Option<&Binding<D>> {
        self.bindings.iter().find(|b| b.output == output)
    }

    /// Bindings that read `input`, in declaration order.
    pub fn dependents(&self, input: InputId) -> impl Iterator<Item = &Binding<D>> + '_ {
        self.dependents
            .get(&input)
            .into_iter()
            .flatten()
            .map(move |&i| &self.bindings[i])
    }

    /// Resolve a selector by its string name.
    pub fn input_named(&self, name: &str) -> Option<InputId> {
        self.selectors.iter().map(|s| s.id).find(|id| id.0 == name)
    }

    /// Resolve an output slot by its string name.
    pub fn output_named(&self, name: &str) -> Option<OutputId> {
        self.bindings.iter().map(|b| b.output).find(|id| id.0 == name)
    }
}

/// Collects selectors and bindings, then validates them in [`build`](Self::build).
pub struct BindingGraphBuilder<D> {
    selectors: Vec<Selector>,
    bindings: Vec<Binding<D>>,
}

impl<D> BindingGraphBuilder<D> {
    pub fn selector(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn bind(mut self, output: OutputId, inputs: &[InputId], update: UpdateFn<D>) -> Self {
        self.bindings.push(Binding {
            output,
            inputs: inputs.to_vec(),
            update,
        });
        self
    }

    pub fn build(self) -> Result<BindingGraph<D>> {
        let mut declared = HashSet::new();
        for selector in &self.selectors {
            if !declared.insert(selector.id) {
                return Err(BindingError::DuplicateSelector(selector.id));
            }
            if !selector.accepts(selector.default) {
                return Err(BindingError::InvalidDefault {
                    input: selector.id,
                    value: selector.default.to_string(),
                });
            }
        }

        let mut outputs = HashSet::new();
        let mut dependents: HashMap<InputId, Vec<usize>> = HashMap::new();
        for (index, binding) in self.bindings.iter().enumerate() {
            if !outputs.insert(binding.output) {
                return Err(BindingError::DuplicateOutput(binding.output));
            }
            for input in &binding.inputs {
                if !declared.contains(input) {
                    return Err(BindingError::UnknownInput(input.to_string()));
                }
                let slots = dependents.entry(*input).or_default();
                if !slots.contains(&index) {
                    slots.push(index);
                }
            }
        }

        log::info!(
            "binding graph: {} selectors, {} output slots",
            self.selectors.len(),
            self.bindings.len()
        );
        Ok(BindingGraph {
            selectors: self.selectors,
            bindings: self.bindings,
            dependents,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use climate_views::{ChartKind, ChartSpec, Point, Series};

    pub const COLOR: InputId = InputId("color");
    pub const SIZE: InputId = InputId("size");
    pub const BY_COLOR: OutputId = OutputId("by-color");
    pub const BY_SIZE: OutputId = OutputId("by-size");
    pub const BY_BOTH: OutputId = OutputId("by-both");
    pub const FIXED: OutputId = OutputId("fixed");

    /// Toy data: (color, size, value) rows.
    pub type Toy = Vec<(&'static str, &'static str, f64)>;

    pub fn toy() -> Toy {
        vec![
            ("red", "small", 1.0),
            ("red", "large", 2.0),
            ("blue", "small", 3.0),
        ]
    }

    fn chart(title: String, rows: Vec<f64>) -> View {
        let mut spec = ChartSpec::new(ChartKind::GroupedBar, title, "x", "y");
        if !rows.is_empty() {
            spec.series.push(Series {
                name: "rows".to_string(),
                color: "#000000".to_string(),
                points: rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, y)| Point { x: i.to_string(), y })
                    .collect(),
            });
        }
        View::Chart(spec)
    }

    fn by_color(data: &Toy, inputs: &[&str]) -> View {
        let color = inputs[0];
        chart(
            format!("color={color}"),
            data.iter().filter(|r| r.0 == color).map(|r| r.2).collect(),
        )
    }

    fn by_size(data: &Toy, inputs: &[&str]) -> View {
        let size = inputs[0];
        chart(
            format!("size={size}"),
            data.iter().filter(|r| r.1 == size).map(|r| r.2).collect(),
        )
    }

    fn by_both(data: &Toy, inputs: &[&str]) -> View {
        let (size, color) = (inputs[0], inputs[1]);
        chart(
            format!("size={size},color={color}"),
            data.iter()
                .filter(|r| r.0 == color && r.1 == size)
                .map(|r| r.2)
                .collect(),
        )
    }

    fn fixed(data: &Toy, _inputs: &[&str]) -> View {
        chart("all".to_string(), data.iter().map(|r| r.2).collect())
    }

    pub fn toy_graph() -> BindingGraph<Toy> {
        BindingGraph::builder()
            .selector(Selector::new(COLOR, vec!["red", "blue"], "red"))
            .selector(Selector::new(SIZE, vec!["small", "large"], "small"))
            .bind(FIXED, &[], fixed)
            .bind(BY_COLOR, &[COLOR], by_color)
            .bind(BY_SIZE, &[SIZE], by_size)
            .bind(BY_BOTH, &[SIZE, COLOR], by_both)
            .build()
            .unwrap()
    }

    #[test]
    fn dependents_follow_declaration_order() {
        let graph = toy_graph();
        let color: Vec<OutputId> = graph.dependents(COLOR).map(|b| b.output()).collect();
        assert_eq!(color, vec![BY_COLOR, BY_BOTH]);
        let size: Vec<OutputId> = graph.dependents(SIZE).map(|b| b.output()).collect();
        assert_eq!(size, vec![BY_SIZE, BY_BOTH]);
        assert_eq!(graph.dependents(InputId("other")).count(), 0);
    }

    #[test]
    fn bindings_keep_declared_input_order() {
        let graph = toy_graph();
        let both = graph.binding(BY_BOTH).unwrap();
        assert_eq!(both.inputs(), &[SIZE, COLOR]);
        assert!(graph.binding(FIXED).unwrap().inputs().is_empty());
    }

    #[test]
    fn duplicate_output_is_rejected() {
        let result = BindingGraph::<Toy>::builder()
            .selector(Selector::new(COLOR, vec!["red"], "red"))
            .bind(BY_COLOR, &[COLOR], by_color)
            .bind(BY_COLOR, &[COLOR], by_size)
            .build();
        assert_eq!(result.err(), Some(BindingError::DuplicateOutput(BY_COLOR)));
    }

    #[test]
    fn undeclared_input_is_rejected() {
        let result = BindingGraph::<Toy>::builder()
            .bind(BY_SIZE, &[SIZE], by_size)
            .build();
        assert_eq!(result.err(), Some(BindingError::UnknownInput("size".to_string())));
    }

    #[test]
    fn selector_wiring_is_validated() {
        let duplicate = BindingGraph::<Toy>::builder()
            .selector(Selector::new(COLOR, vec!["red"], "red"))
            .selector(Selector::new(COLOR, vec!["blue"], "blue"))
            .build();
        assert_eq!(duplicate.err(), Some(BindingError::DuplicateSelector(COLOR)));

        let bad_default = BindingGraph::<Toy>::builder()
            .selector(Selector::new(COLOR, vec!["red"], "green"))
            .build();
        assert!(matches!(
            bad_default.err(),
            Some(BindingError::InvalidDefault { input: COLOR, .. })
        ));
    }

    #[test]
    fn ids_resolve_by_name() {
        let graph = toy_graph();
        assert_eq!(graph.input_named("size"), Some(SIZE));
        assert_eq!(graph.output_named("by-both"), Some(BY_BOTH));
        assert_eq!(graph.output_named("nope"), None);
        assert!(graph.selector(COLOR).unwrap().accepts("blue"));
        assert!(!graph.selector(COLOR).unwrap().accepts("green"));
    }
}
