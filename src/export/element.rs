//! Element synthesis: one run in, one HTML element out (or nothing).

use crate::scan::Run;
use crate::script::Script;
use crate::style::resolve_class;

use super::escape::{escape_attr, escape_html};

/// Build the HTML element for a run, or `None` when its class is suppressed.
///
/// The class attribute always carries the bare class name, never the element
/// name: every plain class renders as `p` but keeps its own class so a
/// stylesheet can still tell dialog from action. Tags come from an external
/// annotator, so the class name is attribute-escaped like the run text.
pub fn build_element(script: &Script, run: &Run) -> Option<String> {
    let (class, spec) = resolve_class(run.tag.as_deref());
    if spec.suppressed {
        return None;
    }
    let class = escape_attr(class);
    let text = escape_html(run.text(script));
    Some(format!(
        "<{tag} class=\"{class}\">{text}</{tag}>\n",
        tag = spec.tag
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_runs;
    use crate::script::StyleSpan;

    fn single_run(script: &Script) -> Run {
        let runs = scan_runs(script, 0..script.len()).unwrap();
        assert_eq!(runs.len(), 1);
        runs.into_iter().next().unwrap()
    }

    #[test]
    fn test_scene_heading_element() {
        let script = Script::with_spans(
            "INT. ROOM",
            vec![StyleSpan::new(0, 9, "fountain-scene-heading")],
        )
        .unwrap();
        let run = single_run(&script);
        assert_eq!(
            build_element(&script, &run).as_deref(),
            Some("<h1 class=\"scene-heading\">INT. ROOM</h1>\n")
        );
    }

    #[test]
    fn test_untagged_run_is_action_paragraph() {
        let script = Script::new("A man enters.");
        let run = single_run(&script);
        assert_eq!(
            build_element(&script, &run).as_deref(),
            Some("<p class=\"action\">A man enters.</p>\n")
        );
    }

    #[test]
    fn test_plain_class_renders_as_p_with_own_class() {
        let script =
            Script::with_spans("Hello.", vec![StyleSpan::new(0, 6, "fountain-dialog")]).unwrap();
        let run = single_run(&script);
        assert_eq!(
            build_element(&script, &run).as_deref(),
            Some("<p class=\"dialog\">Hello.</p>\n")
        );
    }

    #[test]
    fn test_comment_run_suppressed() {
        let script = Script::with_spans(
            "cut this scene?",
            vec![StyleSpan::new(0, 15, "fountain-comment")],
        )
        .unwrap();
        let run = single_run(&script);
        assert_eq!(build_element(&script, &run), None);
    }

    #[test]
    fn test_hostile_tag_cannot_break_out_of_attribute() {
        let script = Script::with_spans(
            "Hi.",
            vec![StyleSpan::new(0, 3, "fountain-x\" onload=\"evil()")],
        )
        .unwrap();
        let run = single_run(&script);
        assert_eq!(
            build_element(&script, &run).as_deref(),
            Some("<p class=\"x&quot; onload=&quot;evil()\">Hi.</p>\n")
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let script = Script::new("R&D <lab>");
        let run = single_run(&script);
        assert_eq!(
            build_element(&script, &run).as_deref(),
            Some("<p class=\"action\">R&amp;D &lt;lab&gt;</p>\n")
        );
    }
}
