use regex::Regex;

use super::StatementError;
use crate::models::{AccountKind, RawTransaction, Statement, StatementAccount};

/// A node of the OFX element tree. Leaves carry `text`, aggregates carry
/// `children`. Names are upper-cased.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Element {
    pub(crate) name: String,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<Element>,
}

impl Element {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            ..Self::default()
        }
    }

    pub(crate) fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child named `name`. A present but empty leaf gives `""`.
    pub(crate) fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_deref().unwrap_or(""))
    }
}

/// Parse the body of an OFX file into its `<OFX>` element tree.
///
/// Works for both SGML (1.x, unclosed leaves) and XML (2.x) files. The header
/// block before `<OFX>` is skipped.
pub(crate) fn parse_document(text: &str) -> Result<Element, StatementError> {
    // ASCII upper-casing keeps byte offsets intact.
    let start = text
        .to_ascii_uppercase()
        .find("<OFX>")
        .ok_or_else(|| StatementError::Format("missing <OFX> root element".into()))?;
    let body = &text[start..];

    let tag_re = Regex::new(r"<(/?)([A-Za-z0-9_.]+)[ \t\r\n]*>")
        .map_err(|e| StatementError::Unexpected(e.to_string()))?;

    let mut stack: Vec<Element> = Vec::new();
    let mut last_end = 0;

    for caps in tag_re.captures_iter(body) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        set_text(&mut stack, &body[last_end..whole.start()]);
        last_end = whole.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        if !closing {
            // SGML leaf without a closing tag: it ends where the next tag begins.
            if stack.last().is_some_and(|top| top.text.is_some()) {
                close_top(&mut stack);
            }
            stack.push(Element::new(name.as_str()));
            continue;
        }

        let name = name.as_str().to_ascii_uppercase();
        let Some(depth) = stack.iter().rposition(|e| e.name == name) else {
            return Err(StatementError::Format(format!(
                "unexpected closing tag </{name}>"
            )));
        };
        while stack.len() > depth + 1 {
            close_unterminated(&mut stack);
        }
        if stack.len() == 1 {
            if let Some(root) = stack.pop() {
                return Ok(root);
            }
        }
        close_top(&mut stack);
    }

    Err(StatementError::Format("unterminated <OFX> element".into()))
}

fn set_text(stack: &mut [Element], raw: &str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    if let Some(top) = stack.last_mut() {
        if top.children.is_empty() {
            top.text = Some(decode_entities(trimmed));
        }
    }
}

/// Pop the innermost open element and attach it to its parent.
fn close_top(stack: &mut Vec<Element>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done);
        }
    }
}

/// Pop an element that never saw its own closing tag. An empty SGML leaf
/// swallows the siblings that follow it; those are handed back to the parent.
fn close_unterminated(stack: &mut Vec<Element>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(mut done) = stack.pop() {
        let adopted = std::mem::take(&mut done.children);
        if !adopted.is_empty() && done.text.is_none() {
            done.text = Some(String::new());
        }
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done);
            parent.children.extend(adopted);
        }
    }
}

fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Read the accounts and their transactions out of an OFX document, in the
/// order they appear.
pub(crate) fn read_statement(text: &str) -> Result<Statement, StatementError> {
    let root = parse_document(text)?;
    let mut accounts = Vec::new();
    collect_accounts(&root, &mut accounts);
    Ok(Statement { accounts })
}

fn collect_accounts(node: &Element, out: &mut Vec<StatementAccount>) {
    for child in &node.children {
        match child.name.as_str() {
            "STMTRS" => out.push(read_account(child, AccountKind::Bank, "BANKACCTFROM")),
            "CCSTMTRS" => out.push(read_account(child, AccountKind::CreditCard, "CCACCTFROM")),
            _ => collect_accounts(child, out),
        }
    }
}

fn read_account(node: &Element, kind: AccountKind, from_tag: &str) -> StatementAccount {
    let account_id = node
        .child(from_tag)
        .and_then(|from| from.child_text("ACCTID"))
        .unwrap_or_default()
        .to_string();

    let transactions = node
        .child("BANKTRANLIST")
        .map(|list| {
            list.children
                .iter()
                .filter(|c| c.name == "STMTTRN")
                .map(read_transaction)
                .collect()
        })
        .unwrap_or_default();

    StatementAccount {
        account_id,
        kind,
        transactions,
    }
}

fn read_transaction(node: &Element) -> RawTransaction {
    let text = |name: &str| node.child_text(name).map(str::to_string);
    RawTransaction {
        trn_type: text("TRNTYPE"),
        posted: text("DTPOSTED"),
        amount: text("TRNAMT"),
        fitid: text("FITID"),
        name: text("NAME"),
        memo: text("MEMO"),
    }
}

#[cfg(test)]
#[path = "ofx_tests.rs"]
mod tests;
