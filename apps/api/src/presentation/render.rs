//! Plain-text rendering of each wizard screen.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::i18n::{t, t_with, Language, SUPPORTED_LANGUAGES};
use crate::models::catalog::PROVINCES;
use crate::models::profile::Profile;
use crate::models::roadmap::RoadmapResult;
use crate::presentation::derive::{alternative_jobs, credential_steps, training_items};
use crate::wizard::form::FormField;

const RULE: &str = "────────────────────────────────────────────────────────";

pub fn render_welcome(language: Language) -> String {
    let languages: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|l| {
            let code = l.code().to_uppercase();
            if *l == language {
                format!("[{code}]")
            } else {
                code
            }
        })
        .collect();

    format!(
        "{language_label}: {langs}\n\n{headline}\n{subtitle}\n\n  ⏎  {start}\n",
        language_label = t(language, "welcome.language"),
        langs = languages.join(" "),
        headline = t(language, "welcome.headline"),
        subtitle = t(language, "welcome.subtitle"),
        start = t(language, "welcome.start"),
    )
}

/// Conversational prompt for one form field, e.g. `My name is [First, Last]`.
pub fn render_form_prompt(language: Language, field: FormField) -> String {
    let (label, placeholder) = match field {
        FormField::FullName => ("form.myNameIs", "form.namePlaceholder"),
        FormField::Nationality => ("form.from", "form.countryPlaceholder"),
        FormField::Profession => ("form.andImA", "form.professionPlaceholder"),
        FormField::YearsExperience => ("form.with", "form.yearsPlaceholder"),
        FormField::Province => ("form.yearsOfExperience", "form.provincePlaceholder"),
        FormField::Email => ("form.myEmailIs", "form.emailPlaceholder"),
    };

    let mut out = format!("{} [{}]", t(language, label), t(language, placeholder));
    if field == FormField::Province {
        out.push('\n');
        for (i, province) in PROVINCES.iter().enumerate() {
            let _ = writeln!(out, "  {:>2}. {}", i + 1, t(language, province.label_key));
        }
    }
    out
}

pub fn render_error(language: Language, message: &str) -> String {
    format!(
        "{RULE}\n✗ {title}\n  {message}\n\n  [r] {retry}   [d] {dismiss}\n{RULE}\n",
        title = t(language, "error.title"),
        retry = t(language, "error.retry"),
        dismiss = t(language, "error.dismiss"),
    )
}

pub fn render_notice(message: &str) -> String {
    format!("» {message}\n")
}

pub fn render_footer(language: Language) -> String {
    format!("\n{RULE}\naivamos · {}\n", t(language, "footer.tagline"))
}

pub fn render_results(
    language: Language,
    profile: &Profile,
    result: &RoadmapResult,
    checked: &BTreeSet<usize>,
) -> String {
    let province = profile.province_label(language);
    let years = profile.years_experience.to_string();
    let mut out = String::new();

    let _ = writeln!(out, "{}", t(language, "results.title"));
    let _ = writeln!(
        out,
        "{}\n",
        t_with(
            language,
            "results.subtitle",
            &[
                ("profession", profile.profession.as_str()),
                ("nationality", profile.nationality.as_str()),
                ("years", years.as_str()),
                ("province", province),
            ],
        )
    );
    let _ = writeln!(out, "{}\n", result.summary);

    section(&mut out, t(language, "results.professionalDifferences"));
    let _ = writeln!(out, "{}", result.professional_differences);

    section(&mut out, t(language, "results.credentialValidation"));
    let _ = writeln!(
        out,
        "{}",
        t_with(
            language,
            "results.intro.credentialValidation",
            &[("province", province)]
        )
    );
    for step in credential_steps(&result.credential_validation, language) {
        let _ = writeln!(out, "  ● {}", step.text);
        let annotations: Vec<String> = [step.cost, step.time.map(|time| format!("⏱ {time}"))]
            .into_iter()
            .flatten()
            .collect();
        if !annotations.is_empty() {
            let _ = writeln!(out, "    {}", annotations.join("   "));
        }
    }

    section(&mut out, t(language, "results.recommendedTraining"));
    let _ = writeln!(out, "{}", t(language, "results.intro.recommendedTraining"));
    for item in training_items(&result.recommended_training, language) {
        let _ = writeln!(out, "  • {item}");
    }

    section(&mut out, t(language, "results.alternativeJobs"));
    let _ = writeln!(out, "{}", t(language, "results.intro.alternativeJobs"));
    for job in alternative_jobs(&result.alternative_jobs, language) {
        let _ = writeln!(out, "  • {job}");
    }

    section(&mut out, t(language, "results.checklist"));
    for (i, item) in result.checklist.iter().enumerate() {
        let mark = if checked.contains(&i) { "[x]" } else { "[ ]" };
        let _ = writeln!(out, "  {:>2}. {mark} {item}", i + 1);
    }

    let _ = write!(
        out,
        "\n  [#] ✓   [e] {}   [p] {}   [m] {}   [n] {}   [q] {}\n",
        t(language, "results.editInfo"),
        t(language, "results.downloadPdf"),
        t(language, "results.sendEmail"),
        t(language, "results.generateAnother"),
        t(language, "results.quit"),
    );
    out
}

fn section(out: &mut String, title: &str) {
    let _ = write!(out, "\n{RULE}\n{title}\n{RULE}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            full_name: "Ana Ruiz".into(),
            nationality: "Mexico".into(),
            profession: "Civil Engineer".into(),
            years_experience: 8,
            province: "britishColumbia".into(),
            email: "a@x.com".into(),
            display_language: Language::Es,
        }
    }

    fn result() -> RoadmapResult {
        RoadmapResult {
            summary: "Bienvenida Ana".into(),
            professional_differences: "Normas distintas".into(),
            credential_validation: "- Evaluación WES: $250 CAD, 6-8 semanas\n- Examen: 3 months".into(),
            recommended_training: "- Curso A\n- Curso B".into(),
            alternative_jobs: String::new(),
            checklist: vec!["Paso uno".into(), "Paso dos".into()],
        }
    }

    #[test]
    fn test_welcome_marks_current_language() {
        let out = render_welcome(Language::Fr);
        assert!(out.contains("EN ES [FR] PT"));
        assert!(out.contains(t(Language::Fr, "welcome.headline")));
    }

    #[test]
    fn test_province_prompt_lists_all_provinces() {
        let out = render_form_prompt(Language::En, FormField::Province);
        assert!(out.contains(" 1. Ontario"));
        assert!(out.contains("13. Yukon"));
    }

    #[test]
    fn test_results_render_sections_and_annotations() {
        let checked = BTreeSet::from([1]);
        let out = render_results(Language::Es, &profile(), &result(), &checked);

        assert!(out.contains("Tu Roadmap Profesional"));
        assert!(out.contains("Civil Engineer de Mexico con 8 años de experiencia en Columbia Británica"));
        assert!(out.contains("Para validar tu profesión en Columbia Británica, necesitarás:"));
        assert!(out.contains("● Evaluación WES: $250 CAD, 6-8 semanas"));
        assert!(out.contains("$250 CAD"));
        assert!(out.contains("⏱ 3 months"));
        assert!(out.contains("• Curso B"));
        // Empty alternative jobs fall back to defaults.
        assert!(out.contains(t(Language::Es, "defaults.jobs.1")));
        assert!(out.contains(" 1. [ ] Paso uno"));
        assert!(out.contains(" 2. [x] Paso dos"));
    }

    #[test]
    fn test_render_does_not_touch_result() {
        let original = result();
        let copy = original.clone();
        let _ = render_results(Language::En, &profile(), &original, &BTreeSet::new());
        assert_eq!(original, copy);
    }

    #[test]
    fn test_error_block_offers_retry() {
        let out = render_error(Language::Pt, "Failed");
        assert!(out.contains("Erro"));
        assert!(out.contains("[r] Tentar novamente"));
    }
}
