//! Line-oriented input. Each line maps to core messages or an engine-side action.

use jobsearch_core::{
    AlertDraft, DateFilter, FilterField, FilterKey, JobId, JobPosting, Msg, WorkMode,
};
use jobsearch_engine::Registration;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  home                         show the home page
  results                      return to the results of the last search
  search [text]                set the query and search
  query|loc|country|city|district <text>
                               edit a search field (empty text clears it)
  mode <onsite|remote|hybrid> [on|off]
  date <all|today|3hours|8hours>
  filter                       apply the sidebar filters
  remove <query|location|onsite|remote|hybrid|date|country|city|district>
  clear                        clear all filters
  page <n>                     go to a results page
  open <job id>                show a job
  related <n>                  go to a related-jobs page
  apply <job id>               apply to a job
  alert <keywords> | <city> [| <district> [| <frequency>]]
  login <email> <password>
  register <email> <password> <first name> <last name>
  post <title> | <location> | <description>
  edit <job id> | <title> | <location> | <description>
  logout
  help
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Core messages dispatched in order.
    Dispatch(Vec<Msg>),
    Login { email: String, password: String },
    Register(Registration),
    /// Creates a posting, or replaces job `job_id` when set.
    Publish {
        job_id: Option<JobId>,
        posting: JobPosting,
    },
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "home" => dispatch(Msg::HomeOpened),
        "results" => dispatch(Msg::ResultsShown),
        "search" => {
            let mut msgs = Vec::new();
            if !rest.is_empty() {
                msgs.push(Msg::PendingChanged(FilterField::Query(rest.to_string())));
            }
            msgs.push(Msg::SearchSubmitted);
            Command::Dispatch(msgs)
        }
        "query" => edit(FilterField::Query(rest.to_string())),
        "loc" | "location" => edit(FilterField::Location(rest.to_string())),
        "country" => edit(FilterField::Country(rest.to_string())),
        "city" => edit(FilterField::City(rest.to_string())),
        "district" => edit(FilterField::District(rest.to_string())),
        "mode" => parse_mode(rest)?,
        "date" => {
            let filter = DateFilter::from_param(rest)
                .ok_or(CommandError::Usage("date <all|today|3hours|8hours>"))?;
            edit(FilterField::DateFilter(filter))
        }
        "filter" => dispatch(Msg::ApplyFiltersClicked),
        "remove" => dispatch(Msg::FilterRemoved(parse_filter_key(rest)?)),
        "clear" => dispatch(Msg::ClearFiltersClicked),
        "page" => dispatch(Msg::PageSelected(parse_number(rest)?)),
        "open" => dispatch(Msg::JobOpened(parse_number::<JobId>(rest)?)),
        "related" => dispatch(Msg::RelatedPageSelected(parse_number(rest)?)),
        "apply" => dispatch(Msg::ApplyClicked(parse_number::<JobId>(rest)?)),
        "alert" => dispatch(Msg::AlertSubmitted(parse_alert(rest)?)),
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(email), Some(password)) => Command::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => return Err(CommandError::Usage("login <email> <password>")),
            }
        }
        "register" => Command::Register(parse_registration(rest)?),
        "post" => Command::Publish {
            job_id: None,
            posting: parse_posting(rest, "post <title> | <location> | <description>")?,
        },
        "edit" => parse_edit(rest)?,
        "logout" => Command::Logout,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn dispatch(msg: Msg) -> Command {
    Command::Dispatch(vec![msg])
}

fn edit(field: FilterField) -> Command {
    dispatch(Msg::PendingChanged(field))
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, CommandError> {
    text.trim()
        .parse()
        .map_err(|_| CommandError::NotANumber(text.to_string()))
}

fn parse_mode(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "mode <onsite|remote|hybrid> [on|off]";
    let mut parts = rest.split_whitespace();
    let mode = parts
        .next()
        .and_then(WorkMode::from_key)
        .ok_or(CommandError::Usage(USAGE))?;
    let selected = match parts.next() {
        None | Some("on") => true,
        Some("off") => false,
        Some(_) => return Err(CommandError::Usage(USAGE)),
    };
    Ok(edit(FilterField::WorkPreference(mode, selected)))
}

fn parse_filter_key(rest: &str) -> Result<FilterKey, CommandError> {
    let key = match rest.trim().to_ascii_lowercase().as_str() {
        "query" => FilterKey::Query,
        "location" | "loc" => FilterKey::Location,
        "date" => FilterKey::DateFilter,
        "country" => FilterKey::Country,
        "city" => FilterKey::City,
        "district" => FilterKey::District,
        other => match WorkMode::from_key(other) {
            Some(mode) => FilterKey::WorkPreference(mode),
            None => {
                return Err(CommandError::Usage(
                    "remove <query|location|onsite|remote|hybrid|date|country|city|district>",
                ))
            }
        },
    };
    Ok(key)
}

fn fields(rest: &str) -> Vec<String> {
    rest.split('|').map(|part| part.trim().to_string()).collect()
}

fn parse_alert(rest: &str) -> Result<AlertDraft, CommandError> {
    let mut parts = fields(rest).into_iter();
    let keywords = parts.next().unwrap_or_default();
    let city = parts.next().unwrap_or_default();
    if keywords.is_empty() && city.is_empty() {
        return Err(CommandError::Usage(
            "alert <keywords> | <city> [| <district> [| <frequency>]]",
        ));
    }
    Ok(AlertDraft {
        keywords,
        city,
        district: parts.next().unwrap_or_default(),
        frequency: parts.next().filter(|f| !f.is_empty()),
        ..AlertDraft::default()
    })
}

fn parse_registration(rest: &str) -> Result<Registration, CommandError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    match parts.as_slice() {
        [email, password, first_name, last_name @ ..] if !last_name.is_empty() => {
            Ok(Registration {
                email: email.to_string(),
                password: password.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.join(" "),
                ..Registration::default()
            })
        }
        _ => Err(CommandError::Usage(
            "register <email> <password> <first name> <last name>",
        )),
    }
}

fn parse_edit(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "edit <job id> | <title> | <location> | <description>";
    let (id, posting) = rest.split_once('|').ok_or(CommandError::Usage(USAGE))?;
    Ok(Command::Publish {
        job_id: Some(parse_number::<JobId>(id.trim())?),
        posting: parse_posting(posting, USAGE)?,
    })
}

fn parse_posting(rest: &str, usage: &'static str) -> Result<JobPosting, CommandError> {
    match fields(rest).as_slice() {
        [title, location, description] if !title.is_empty() => Ok(JobPosting {
            title: title.clone(),
            description: description.clone(),
            location: location.clone(),
            ..JobPosting::default()
        }),
        _ => Err(CommandError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().expect("command")
    }

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn search_with_text_sets_query_first() {
        assert_eq!(
            parse("search  Veri Analisti "),
            Command::Dispatch(vec![
                Msg::PendingChanged(FilterField::Query("Veri Analisti".into())),
                Msg::SearchSubmitted,
            ])
        );
        assert_eq!(parse("search"), Command::Dispatch(vec![Msg::SearchSubmitted]));
    }

    #[test]
    fn field_edits_and_toggles() {
        assert_eq!(
            parse("city İstanbul"),
            Command::Dispatch(vec![Msg::PendingChanged(FilterField::City(
                "İstanbul".into()
            ))])
        );
        assert_eq!(
            parse("mode remote off"),
            Command::Dispatch(vec![Msg::PendingChanged(FilterField::WorkPreference(
                WorkMode::Remote,
                false
            ))])
        );
        assert_eq!(
            parse("date 3hours"),
            Command::Dispatch(vec![Msg::PendingChanged(FilterField::DateFilter(
                DateFilter::ThreeHours
            ))])
        );
        assert!(parse_command("mode office").is_err());
    }

    #[test]
    fn remove_accepts_work_modes() {
        assert_eq!(
            parse("remove hybrid"),
            Command::Dispatch(vec![Msg::FilterRemoved(FilterKey::WorkPreference(
                WorkMode::Hybrid
            ))])
        );
        assert_eq!(
            parse("remove district"),
            Command::Dispatch(vec![Msg::FilterRemoved(FilterKey::District)])
        );
    }

    #[test]
    fn numeric_arguments_are_checked() {
        assert_eq!(parse("page 3"), Command::Dispatch(vec![Msg::PageSelected(3)]));
        assert_eq!(parse("apply 42"), Command::Dispatch(vec![Msg::ApplyClicked(42)]));
        assert_eq!(
            parse_command("open abc"),
            Err(CommandError::NotANumber("abc".into()))
        );
    }

    #[test]
    fn alert_fields_are_pipe_separated() {
        let Command::Dispatch(msgs) = parse("alert Developer | Ankara | Çankaya | weekly") else {
            panic!("expected dispatch");
        };
        let Msg::AlertSubmitted(draft) = &msgs[0] else {
            panic!("expected alert");
        };
        assert_eq!(draft.keywords, "Developer");
        assert_eq!(draft.location(), "Ankara, Çankaya");
        assert_eq!(draft.frequency.as_deref(), Some("weekly"));
    }

    #[test]
    fn auth_commands() {
        assert_eq!(
            parse("login a@b.c hunter2"),
            Command::Login {
                email: "a@b.c".into(),
                password: "hunter2".into()
            }
        );
        let Command::Register(registration) = parse("register a@b.c pw Ayşe Nur Yılmaz") else {
            panic!("expected register");
        };
        assert_eq!(registration.first_name, "Ayşe");
        assert_eq!(registration.last_name, "Nur Yılmaz");
        assert!(parse_command("login a@b.c").is_err());
    }

    #[test]
    fn posting_uses_defaults_for_missing_fields() {
        let Command::Publish { job_id, posting } =
            parse("post Rust Developer | Ankara | Build services")
        else {
            panic!("expected publish");
        };
        assert_eq!(job_id, None);
        assert_eq!(posting.title, "Rust Developer");
        assert_eq!(posting.company_id, 1);
        assert_eq!(posting.work_mode, "on-site");
        assert_eq!(posting.job_type, "full-time");
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse_command("frobnicate"),
            Err(CommandError::Unknown("frobnicate".into()))
        );
    }

    #[test]
    fn edit_targets_an_existing_job() {
        let Command::Publish { job_id, posting } =
            parse("edit 42 | Senior Rust Developer | İzmir | Own the search service")
        else {
            panic!("expected publish");
        };
        assert_eq!(job_id, Some(42));
        assert_eq!(posting.title, "Senior Rust Developer");
        assert_eq!(posting.location, "İzmir");
        assert_eq!(
            parse_command("edit abc | T | L | D"),
            Err(CommandError::NotANumber("abc".into()))
        );
        assert!(parse_command("edit 42").is_err());
    }

    #[test]
    fn results_returns_without_reseeding() {
        assert_eq!(parse("results"), Command::Dispatch(vec![Msg::ResultsShown]));
    }
}
