//! The fixed shape of the generated `main.go`.

use msg2go_codegen::{CodeFragment, ImportSet, Renderable};
use msg2go_core::GENERATED_HEADER;

use crate::{components::StateDecl, window::Window};

const RIGID_OPEN: &str = "layout.Rigid(func(gtx layout.Context) layout.Dimensions {";
const RIGID_CLOSE: &str = "}),";
const FLEX: &str = "layout.Flex{Axis: layout.Vertical}.Layout(gtx";

/// Imports every generated program needs, whatever its elements.
pub fn baseline_imports() -> ImportSet {
    let mut imports = ImportSet::new();
    imports
        .add("os", "Exit")
        .add_all("gioui.org/app", ["Main", "NewContext", "FrameEvent", "DestroyEvent"])
        .add_all(
            "gioui.org/layout",
            ["Flex", "Vertical", "Rigid", "Context", "Dimensions"],
        )
        .add("gioui.org/op", "Ops")
        .add("gioui.org/op/paint", "Fill")
        .add("gioui.org/widget/material", "NewTheme");
    imports
}

/// Make a slot body end in a `return`.
pub fn ensure_return(mut body: Vec<CodeFragment>) -> Vec<CodeFragment> {
    let returns = body
        .iter()
        .rev()
        .find_map(CodeFragment::last_line)
        .is_some_and(|line| line.trim_start().starts_with("return"));
    if !returns {
        body.push(CodeFragment::line("return layout.Dimensions{}"));
    }
    body
}

/// A complete `package main` with one window and a vertical list of slots.
#[derive(Debug)]
pub struct Skeleton<'a> {
    pub imports: &'a ImportSet,
    pub window: &'a Window,
    pub state: &'a [StateDecl],
    pub slots: &'a [Vec<CodeFragment>],
}

impl Skeleton<'_> {
    fn import_block(&self) -> CodeFragment {
        let lines = self
            .imports
            .sorted()
            .map(|(package, _)| CodeFragment::line(format!("\"{package}\"")))
            .collect();
        CodeFragment::block("import (", lines, Some(")".to_string()))
    }

    fn window_setup(&self) -> Vec<CodeFragment> {
        let options = self
            .window
            .options()
            .iter()
            .map(|option| CodeFragment::line(format!("{},", option.to_go())))
            .collect();

        let mut fragments = vec![
            CodeFragment::line("w := new(app.Window)"),
            CodeFragment::block("w.Option(", options, Some(")".to_string())),
            CodeFragment::blank(),
            CodeFragment::line("var ops op.Ops"),
            CodeFragment::line("th := material.NewTheme()"),
        ];
        if !self.state.is_empty() {
            fragments.push(CodeFragment::blank());
            fragments.extend(self.state.iter().map(|decl| CodeFragment::line(decl.to_go())));
        }
        fragments
    }

    fn flex(&self) -> CodeFragment {
        if self.slots.is_empty() {
            return CodeFragment::line(format!("{FLEX})"));
        }

        let children = self
            .slots
            .iter()
            .map(|slot| CodeFragment::block(RIGID_OPEN, slot.clone(), Some(RIGID_CLOSE.to_string())))
            .collect();
        CodeFragment::block(format!("{FLEX},"), children, Some(")".to_string()))
    }

    fn event_loop(&self) -> CodeFragment {
        let frame = vec![
            CodeFragment::line("gtx := app.NewContext(&ops, e)"),
            CodeFragment::line("paint.Fill(gtx.Ops, th.Bg)"),
            self.flex(),
            CodeFragment::line("e.Frame(gtx.Ops)"),
        ];

        CodeFragment::block(
            "for {",
            vec![
                CodeFragment::line("switch e := w.Event().(type) {"),
                CodeFragment::line("case app.FrameEvent:"),
                CodeFragment::indent(frame),
                CodeFragment::line("case app.DestroyEvent:"),
                CodeFragment::indent(vec![CodeFragment::line("os.Exit(0)")]),
                CodeFragment::line("}"),
            ],
            Some("}".to_string()),
        )
    }
}

impl Renderable for Skeleton<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut goroutine = self.window_setup();
        goroutine.push(CodeFragment::blank());
        goroutine.push(self.event_loop());

        vec![
            CodeFragment::line(GENERATED_HEADER),
            CodeFragment::blank(),
            CodeFragment::line("package main"),
            CodeFragment::blank(),
            self.import_block(),
            CodeFragment::blank(),
            CodeFragment::block(
                "func main() {",
                vec![
                    CodeFragment::block("go func() {", goroutine, Some("}()".to_string())),
                    CodeFragment::line("app.Main()"),
                ],
                Some("}".to_string()),
            ),
        ]
    }
}
