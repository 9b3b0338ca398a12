//! Text rendering of the form and plan screens

use std::collections::HashSet;

use colored::*;
use tracing::warn;

use crate::api::{ExportEntry, Plan, ProgressResponse, Session};
use crate::planner::FormState;

/// `<date> — <subject> — <minutes> mins`
pub fn session_line(session: &Session) -> String {
    format!("{} — {} — {} mins", session.date, session.subject, session.minutes)
}

/// Session keys that appear more than once, in first-seen order
pub fn duplicate_keys(plan: &Plan) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for s in &plan.sessions {
        let key = s.session_uuid.as_str();
        if !seen.insert(key) && !dups.contains(&key) {
            dups.push(key);
        }
    }
    dups
}

pub fn render_form(form: &FormState, color: bool) -> String {
    let heading = paint("Study Planner", color, |s| s.bold());
    let start = if form.start_date.is_empty() {
        "(today)"
    } else {
        form.start_date.as_str()
    };
    let end = if form.end_date.is_empty() {
        "(service default)"
    } else {
        form.end_date.as_str()
    };

    format!(
        "{heading}\n\
         Subjects (comma separated): {}\n\
         Start Date: {start}\n\
         End Date: {end}\n\
         Hours per day: {}\n",
        form.subjects_text, form.hours
    )
}

/// One bordered card per session, in the order the service returned them
pub fn render_plan(plan: &Plan, color: bool) -> String {
    for key in duplicate_keys(plan) {
        warn!(session_uuid = %key, "render_plan: duplicate session key");
    }

    let mut out = String::new();
    out.push_str(&paint("Your Study Plan", color, |s| s.bold()));
    out.push('\n');

    if plan.sessions.is_empty() {
        out.push_str("No sessions scheduled\n");
        return out;
    }

    for session in &plan.sessions {
        out.push_str(&render_card(session, color));
    }
    out
}

fn render_card(session: &Session, color: bool) -> String {
    let plain = session_line(session);
    let topic = session.topic.as_ref().map(|t| format!("topic: {t}"));
    let inner = plain
        .chars()
        .count()
        .max(topic.as_ref().map_or(0, |t| t.chars().count()));
    let body_pad = " ".repeat(inner - plain.chars().count());
    let body = if color {
        format!(
            "{} — {} — {} mins",
            session.date.as_str().bold(),
            session.subject,
            session.minutes
        )
    } else {
        plain
    };

    let border = "─".repeat(inner + 2);
    let mut card = format!("┌{border}┐\n│ {body}{body_pad} │\n");
    if let Some(line) = topic {
        let pad = " ".repeat(inner - line.chars().count());
        card.push_str(&format!("│ {line}{pad} │\n"));
    }
    card.push_str(&format!("└{border}┘\n"));
    card
}

pub fn render_export(entries: &[ExportEntry], color: bool) -> String {
    if entries.is_empty() {
        return "No sessions found\n".to_string();
    }

    let subject_width = entries.iter().map(|e| e.subject.chars().count()).max().unwrap_or(0).max(7);
    let mut out = format!(
        "{:<10}  {:<subject_width$}  {:>7}  {:<8}  {}\n",
        "DATE", "SUBJECT", "MINUTES", "STATUS", "SESSION"
    );
    for e in entries {
        let status = format!("{:<8}", e.status);
        let status = paint(&status, color, |s| match e.status.as_str() {
            "done" => s.green(),
            "skipped" => s.yellow(),
            _ => s.normal(),
        });
        out.push_str(&format!(
            "{:<10}  {:<subject_width$}  {:>7}  {status}  {}\n",
            e.date, e.subject, e.minutes, e.session_uuid
        ));
    }
    out
}

pub fn render_progress(resp: &ProgressResponse, color: bool) -> String {
    let mark = if resp.updated {
        paint("✓", color, |s| s.green())
    } else {
        paint("✗", color, |s| s.red())
    };
    let status = resp.session.status.as_deref().unwrap_or("unknown");
    format!("{mark} {} [{status}]\n", session_line(&resp.session))
}

fn paint(text: &str, color: bool, style: impl Fn(ColoredString) -> ColoredString) -> String {
    if color {
        style(text.normal()).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(uuid: &str, date: &str, subject: &str, minutes: u32) -> Session {
        Session {
            session_uuid: uuid.to_string(),
            date: date.to_string(),
            subject: subject.to_string(),
            minutes,
            topic: None,
            status: None,
        }
    }

    fn plan(sessions: Vec<Session>) -> Plan {
        Plan {
            sessions,
            ..Default::default()
        }
    }

    #[test]
    fn test_session_line() {
        assert_eq!(session_line(&session("a", "2024-01-01", "CSA", 50)), "2024-01-01 — CSA — 50 mins");
    }

    #[test]
    fn test_render_plan_single_card() {
        let out = render_plan(&plan(vec![session("a", "2024-01-01", "CSA", 50)]), false);

        assert!(out.starts_with("Your Study Plan\n"));
        assert_eq!(out.matches("2024-01-01 — CSA — 50 mins").count(), 1);
        assert_eq!(out.matches('┌').count(), 1);
    }

    #[test]
    fn test_render_plan_keeps_server_order() {
        let out = render_plan(
            &plan(vec![
                session("c", "2024-01-03", "OOP", 50),
                session("a", "2024-01-01", "CSA", 50),
                session("b", "2024-01-02", "DE", 25),
            ]),
            false,
        );

        let first = out.find("2024-01-03").unwrap();
        let second = out.find("2024-01-01").unwrap();
        let third = out.find("2024-01-02 — DE — 25 mins").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_plan_duplicates_still_rendered() {
        let p = plan(vec![
            session("a", "2024-01-01", "CSA", 50),
            session("a", "2024-01-01", "DE", 50),
            session("a", "2024-01-02", "OOP", 50),
        ]);

        assert_eq!(duplicate_keys(&p), vec!["a"]);
        assert_eq!(render_plan(&p, false).matches('┌').count(), 3);
    }

    #[test]
    fn test_render_plan_empty() {
        assert!(render_plan(&plan(vec![]), false).contains("No sessions scheduled"));
    }

    #[test]
    fn test_render_card_with_topic() {
        let mut s = session("a", "2024-01-01", "CSA", 50);
        s.topic = Some("Pipelining".to_string());
        let card = render_card(&s, false);
        assert!(card.contains("topic: Pipelining"));
        assert_eq!(card.lines().count(), 4);
    }

    #[test]
    fn test_render_card_widens_for_long_topic() {
        let mut s = session("a", "2024-01-01", "CSA", 50);
        s.topic = Some("Instruction pipelining and hazards".to_string());
        let card = render_card(&s, false);

        let widths: Vec<_> = card.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|w| *w == widths[0]), "ragged card: {card}");
        assert!(card.lines().nth(1).unwrap().ends_with(" │"));
        assert!(card.contains("│ topic: Instruction pipelining and hazards │"));
    }

    #[test]
    fn test_render_form() {
        let out = render_form(&FormState::default(), false);
        assert!(out.contains("Study Planner"));
        assert!(out.contains("Subjects (comma separated): CSA,DE,OOP"));
        assert!(out.contains("Start Date: (today)"));
        assert!(out.contains("Hours per day: 3"));
    }

    #[test]
    fn test_render_export() {
        let entries = vec![ExportEntry {
            date: "2024-01-01".to_string(),
            subject: "CSA".to_string(),
            minutes: 50,
            status: "done".to_string(),
            session_uuid: "a".to_string(),
        }];
        let out = render_export(&entries, false);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("DATE"));
        assert!(lines[1].contains("CSA") && lines[1].contains("done") && lines[1].ends_with('a'));

        assert_eq!(render_export(&[], false), "No sessions found\n");
    }

    #[test]
    fn test_render_progress() {
        let mut s = session("a", "2024-01-01", "CSA", 50);
        s.status = Some("skipped".to_string());
        let out = render_progress(&ProgressResponse { updated: true, session: s }, false);
        assert_eq!(out, "✓ 2024-01-01 — CSA — 50 mins [skipped]\n");
    }
}
