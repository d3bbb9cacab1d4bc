//! Checkout-ref patching for workflow documents.
//!
//! The patcher is purely line oriented: it never parses YAML. A checkout step
//! is any line containing [`CHECKOUT_MARKER`], and its `with:` block is found
//! by counting leading spaces. Every line keeps its original terminator, so
//! the output differs from the input only on the `ref:` lines it touches.

use std::collections::BTreeMap;

/// Substring identifying a checkout step.
pub const CHECKOUT_MARKER: &str = "uses: actions/checkout@v";

/// Extra indentation of keys nested under `with:`.
const NESTED_INDENT: usize = 2;

/// A single edit applied to a document.
///
/// `line` is a 0-based index into the patched output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefEdit {
    /// An existing `ref:` line was rewritten; `previous` holds its old content.
    Replaced { line: usize, previous: String },
    /// A new `ref:` line was added to a `with:` block.
    Inserted { line: usize },
}

impl RefEdit {
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            RefEdit::Replaced { line, .. } | RefEdit::Inserted { line } => *line,
        }
    }
}

/// Result of patching one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub text: String,
    pub changed: bool,
    pub edits: Vec<RefEdit>,
}

/// One line of a document, split from its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Line<'a> {
    content: &'a str,
    ending: &'a str,
}

impl Line<'_> {
    fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn indent(&self) -> usize {
        leading_spaces(self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Replace(usize),
    InsertBefore(usize),
}

/// What to do for one matched `with:` block, in original line indices.
#[derive(Debug, Clone, Copy)]
struct Plan<'a> {
    target: Target,
    indent: usize,
    ending: &'a str,
}

/// Points every checkout step in `text` at `branch`.
///
/// A step is only patched when it already has a `with:` key aligned with its
/// `uses:` key. An existing `ref:` is rewritten in place; otherwise a new
/// `ref:` goes right before `token:` when present, or directly after `with:`.
/// Applying the same branch twice reports no change the second time.
#[must_use]
pub fn patch_checkout_ref(text: &str, branch: &str) -> PatchOutcome {
    let lines = split_lines(text);

    // Keyed by the `with:` line so two markers sharing a block patch it once.
    let mut plans: BTreeMap<usize, Plan<'_>> = BTreeMap::new();
    for (idx, line) in lines.iter().enumerate() {
        if !line.content.contains(CHECKOUT_MARKER) {
            continue;
        }
        if let Some((with_idx, plan)) = plan_step(&lines, idx) {
            plans.entry(with_idx).or_insert(plan);
        }
    }

    render(&lines, plans.into_values(), branch, text.len())
}

/// Rejects branch names that would break the line structure of a workflow.
pub fn validate_branch_name(branch: &str) -> anyhow::Result<()> {
    if branch.is_empty() || branch.contains(['\0', '\n', '\r']) {
        anyhow::bail!("Invalid branch name: {:?}", branch);
    }
    Ok(())
}

fn plan_step<'a>(lines: &[Line<'a>], marker: usize) -> Option<(usize, Plan<'a>)> {
    let uses_indent = key_indent(lines[marker].content);
    let with_prefix = format!("{}with:", " ".repeat(uses_indent));

    let with_idx = lines
        .iter()
        .enumerate()
        .skip(marker + 1)
        .filter(|(_, line)| !line.is_blank())
        .take_while(|(_, line)| line.indent() >= uses_indent)
        .find(|(_, line)| line.content.starts_with(&with_prefix))
        .map(|(idx, _)| idx)?;

    let inner_indent = uses_indent + NESTED_INDENT;
    let inner = " ".repeat(inner_indent);
    let ref_prefix = format!("{inner}ref:");
    let token_prefix = format!("{inner}token:");

    let mut token_idx = None;
    for (idx, line) in lines.iter().enumerate().skip(with_idx + 1) {
        if line.is_blank() {
            continue;
        }
        if line.indent() <= uses_indent {
            break;
        }
        if line.content.starts_with(&ref_prefix) {
            let plan = Plan {
                target: Target::Replace(idx),
                indent: inner_indent,
                ending: line.ending,
            };
            return Some((with_idx, plan));
        }
        if token_idx.is_none() && line.content.starts_with(&token_prefix) {
            token_idx = Some(idx);
        }
    }

    let plan = Plan {
        target: Target::InsertBefore(token_idx.unwrap_or(with_idx + 1)),
        indent: inner_indent,
        ending: lines[with_idx].ending,
    };
    Some((with_idx, plan))
}

fn render<'a>(
    lines: &[Line<'a>],
    plans: impl Iterator<Item = Plan<'a>>,
    branch: &str,
    capacity: usize,
) -> PatchOutcome {
    let mut inserts = BTreeMap::new();
    let mut replacements = BTreeMap::new();
    for plan in plans {
        match plan.target {
            Target::InsertBefore(idx) => {
                inserts.entry(idx).or_insert(plan);
            }
            Target::Replace(idx) => {
                replacements.entry(idx).or_insert(plan);
            }
        }
    }

    let mut text = String::with_capacity(capacity + inserts.len() * (branch.len() + 16));
    let mut edits = Vec::new();
    let mut out_line = 0;

    for (idx, line) in lines.iter().enumerate() {
        if let Some(plan) = inserts.get(&idx) {
            push_ref(&mut text, plan, branch);
            edits.push(RefEdit::Inserted { line: out_line });
            out_line += 1;
        }

        match replacements.get(&idx) {
            Some(plan) => {
                let desired = desired_ref(plan.indent, branch);
                if line.content != desired {
                    edits.push(RefEdit::Replaced {
                        line: out_line,
                        previous: line.content.to_string(),
                    });
                }
                text.push_str(&desired);
            }
            None => text.push_str(line.content),
        }
        text.push_str(line.ending);
        out_line += 1;
    }

    // Only reachable when `with:` is the last line of the document.
    if let Some(plan) = inserts.get(&lines.len()) {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        push_ref(&mut text, plan, branch);
        edits.push(RefEdit::Inserted { line: out_line });
    }

    PatchOutcome {
        changed: !edits.is_empty(),
        text,
        edits,
    }
}

fn push_ref(text: &mut String, plan: &Plan<'_>, branch: &str) {
    text.push_str(&desired_ref(plan.indent, branch));
    text.push_str(plan.ending);
}

fn desired_ref(indent: usize, branch: &str) -> String {
    format!("{}ref: {branch}", " ".repeat(indent))
}

/// Splits `text` into lines, keeping `\n` or `\r\n` terminators separate.
fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.split_inclusive('\n')
        .map(|raw| {
            let content = raw
                .strip_suffix('\n')
                .map(|body| body.strip_suffix('\r').unwrap_or(body))
                .unwrap_or(raw);
            Line {
                content,
                ending: &raw[content.len()..],
            }
        })
        .collect()
}

fn leading_spaces(s: &str) -> usize {
    s.len() - s.trim_start_matches(' ').len()
}

/// Column of the key on a step line, counting an inline `- ` list marker as
/// indentation.
fn key_indent(content: &str) -> usize {
    let leading = leading_spaces(content);
    match content[leading..].strip_prefix('-') {
        Some(rest) if rest.starts_with(' ') => leading + 1 + leading_spaces(rest),
        _ => leading,
    }
}
