// Prompt and fallback templates for the roadmap pipeline.
// Placeholders are `{name}` and are filled in one pass by `i18n::interpolate`.

/// Roadmap prompt template.
/// Replace: {full_name}, {nationality}, {profession}, {years}, {province}, {language}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are a career advisor for skilled immigrants in Canada. Create a roadmap for this person:

Name: {full_name}
From: {nationality}
Profession: {profession}
Experience: {years} years
Province: {province}

Respond ONLY with valid JSON in this exact format:

{
  "summary": "Welcome message and brief overview",
  "professionalDifferences": "Explain in 2-4 sentences the main differences between practicing this profession in the user's home country and in the selected Canadian province. Cover regulations, legal requirements, workplace culture, language, tools/software used, and professional standards.",
  "credentialValidation": "List each key step required to validate the profession in the province. For every step, include: step name, short description (what is done and why), approximate cost in CAD, estimated processing time, the regulatory body name (and a link if possible), and a practical tip (common mistakes to avoid or useful resources). Format as clear, distinct steps or paragraphs with costs and times clearly marked.",
  "recommendedTraining": "Suggest 3-4 relevant courses or programs (online, college/university, certifications, or free/subsidized courses in the province), each with a brief explanation of why they help improve the user's opportunities and any language requirements. Include links wherever possible.",
  "alternativeJobs": "List 3-4 specific job titles that can provide Canadian experience or income while the user completes validation. For each, briefly explain how the role supports career progression and include a job board or association link if available.",
  "checklist": [
    "First prioritized actionable task - be specific",
    "Second actionable task - be specific",
    "Third actionable task - be specific",
    "Fourth actionable task - be specific",
    "Fifth actionable task - be specific"
  ]
}

Language: {language}
Keep responses concise and practical. Return only the JSON object."#;

// Fallback templates used when the model output cannot be parsed.
// Replace: {full_name}, {nationality}, {profession}, {years}, {province}

pub const FALLBACK_SUMMARY: &str = "Hello {full_name}! As a {profession} from {nationality} with {years} years of experience in {province}, here's your personalized career roadmap for Canada.";

pub const FALLBACK_PROFESSIONAL_DIFFERENCES: &str = "Working as a {profession} in {province} requires understanding local regulations, professional standards, and workplace culture. Practice in {province} may differ from {nationality} in licensing rules, legal responsibilities, language expectations, and the tools used day to day.";

pub const FALLBACK_CREDENTIAL_VALIDATION: &str = "Identify the regulatory body for {profession} in {province} and confirm whether the profession is regulated.
Request an educational credential assessment of your degrees from {nationality}.
Prepare certified translations of your diplomas, transcripts, and reference letters.
Submit your application to the regulatory body and document your {years} years of experience.
Complete any required exams, language tests, or supervised practice.";

pub const FALLBACK_RECOMMENDED_TRAINING: &str = "Bridging programs for internationally trained {profession}s offered by colleges in {province}.
Workplace communication and occupation-specific language courses.
Courses on Canadian codes, standards, and regulations for your field.
Free settlement and employment workshops for newcomers in {province}.";

pub const FALLBACK_ALTERNATIVE_JOBS: &str = "Technician or technologist roles related to {profession}.
Assistant or coordinator positions in your field.
Project support or quality control roles that build Canadian experience.
Mentorship or volunteer roles with professional associations in {province}.";

/// Hardcoded checklist for the fallback roadmap.
/// Replace: {profession}, {province}
pub const FALLBACK_CHECKLIST: [&str; 6] = [
    "Research the regulatory body for {profession} in {province}",
    "Gather all educational and professional documents",
    "Get documents translated and notarized if needed",
    "Apply for credential assessment",
    "Update resume to Canadian standards",
    "Start networking with local professionals",
];
