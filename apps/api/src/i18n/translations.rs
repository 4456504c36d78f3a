use super::Language;

type Table = &'static [(&'static str, &'static str)];

pub(super) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

#[cfg(test)]
pub(super) fn keys(language: Language) -> impl Iterator<Item = &'static str> {
    table(language).iter().map(|(k, _)| *k)
}

fn table(language: Language) -> Table {
    match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Fr => FR,
        Language::Pt => PT,
    }
}

const EN: Table = &[
    // Welcome
    ("welcome.headline", "Turn your experience into a Canadian career."),
    (
        "welcome.subtitle",
        "Get a clear, step-by-step plan to validate your profession and start working in your field—fast.",
    ),
    ("welcome.start", "Begin now"),
    ("welcome.language", "Language"),
    // Form
    ("form.myNameIs", "My name is"),
    ("form.from", "from"),
    ("form.andImA", "and I'm a"),
    ("form.with", "with"),
    ("form.yearsOfExperience", "years of experience, living in"),
    ("form.myEmailIs", "My email is"),
    ("form.namePlaceholder", "First, Last"),
    ("form.countryPlaceholder", "Country"),
    ("form.professionPlaceholder", "Profession"),
    ("form.yearsPlaceholder", "0"),
    ("form.provincePlaceholder", "Province"),
    ("form.emailPlaceholder", "email@example.com"),
    ("form.generate", "Generate my Roadmap"),
    ("form.generating", "Generating your roadmap..."),
    ("form.invalid.fullName", "Please enter your name."),
    ("form.invalid.nationality", "Please choose a country from the list."),
    ("form.invalid.profession", "Please enter your profession."),
    ("form.invalid.yearsExperience", "Years of experience must be greater than zero."),
    ("form.invalid.province", "Please choose a province or territory from the list."),
    ("form.invalid.email", "Please enter a valid email address."),
    // Errors
    ("error.title", "Error"),
    ("error.failed", "Failed to generate roadmap: {message}"),
    ("error.retry", "Try Again"),
    ("error.dismiss", "Dismiss"),
    // Results
    ("results.title", "Your Professional Roadmap"),
    (
        "results.subtitle",
        "Based on your profile as a {profession} from {nationality} with {years} years of experience in {province}",
    ),
    ("results.professionalDifferences", "Professional Differences"),
    ("results.credentialValidation", "Credential Validation"),
    ("results.recommendedTraining", "Recommended Training"),
    ("results.alternativeJobs", "Alternative Jobs"),
    ("results.checklist", "Interactive Checklist"),
    ("results.intro.credentialValidation", "To validate your profession in {province}, you will need:"),
    ("results.intro.recommendedTraining", "To improve your job opportunities in Canada:"),
    ("results.intro.alternativeJobs", "While completing your validation, consider these options:"),
    ("results.editInfo", "Edit Information"),
    ("results.downloadPdf", "Download PDF"),
    ("results.sendEmail", "Send by Email"),
    ("results.generateAnother", "Generate another roadmap"),
    ("results.quit", "Quit"),
    // Stub notifications
    ("notice.pdf", "Your roadmap PDF would be downloaded here."),
    ("notice.email", "Your roadmap has been sent to {email}"),
    ("notice.edit", "This would allow you to edit your information."),
    // Footer
    ("footer.tagline", "Building pathways for global talent."),
    // Provinces
    ("province.ontario", "Ontario"),
    ("province.quebec", "Quebec"),
    ("province.alberta", "Alberta"),
    ("province.britishColumbia", "British Columbia"),
    ("province.manitoba", "Manitoba"),
    ("province.saskatchewan", "Saskatchewan"),
    ("province.novascotia", "Nova Scotia"),
    ("province.newbrunswick", "New Brunswick"),
    ("province.newfoundland", "Newfoundland and Labrador"),
    ("province.pei", "Prince Edward Island"),
    ("province.northwest", "Northwest Territories"),
    ("province.nunavut", "Nunavut"),
    ("province.yukon", "Yukon"),
    // Client-side fallbacks for fields a server response left empty
    ("fallback.summary", "Welcome! Here's your personalized roadmap."),
    ("fallback.professionalDifferences", "Professional requirements may vary between countries."),
    ("fallback.credentialValidation", "Contact relevant professional bodies for credential validation."),
    ("fallback.recommendedTraining", "Consider professional development courses in your field."),
    ("fallback.alternativeJobs", "Explore related positions in your industry."),
    ("fallback.checklist.1", "Research professional requirements"),
    ("fallback.checklist.2", "Gather required documents"),
    ("fallback.checklist.3", "Contact professional bodies"),
    ("fallback.checklist.4", "Apply for credential evaluation"),
    // Display defaults for empty sections
    ("defaults.credentialStep", "Contact the relevant professional regulatory body to begin validation"),
    ("defaults.training", "Consider professional development courses in your field"),
    ("defaults.jobs.1", "Related positions in your industry"),
    ("defaults.jobs.2", "Entry-level opportunities"),
    ("defaults.jobs.3", "Consulting roles"),
];

const ES: Table = &[
    ("welcome.headline", "Convierte tu experiencia en una carrera en Canadá."),
    (
        "welcome.subtitle",
        "Obtén un plan claro y paso a paso para validar tu profesión y empezar a trabajar en tu campo—rápido.",
    ),
    ("welcome.start", "Empezar ahora"),
    ("welcome.language", "Idioma"),
    ("form.myNameIs", "Mi nombre es"),
    ("form.from", "de"),
    ("form.andImA", "y soy"),
    ("form.with", "con"),
    ("form.yearsOfExperience", "años de experiencia, viviendo en"),
    ("form.myEmailIs", "Mi email es"),
    ("form.namePlaceholder", "Nombre, Apellido"),
    ("form.countryPlaceholder", "País"),
    ("form.professionPlaceholder", "Profesión"),
    ("form.yearsPlaceholder", "0"),
    ("form.provincePlaceholder", "Provincia"),
    ("form.emailPlaceholder", "email@ejemplo.com"),
    ("form.generate", "Generar mi Hoja de Ruta"),
    ("form.generating", "Generando tu hoja de ruta..."),
    ("form.invalid.fullName", "Por favor ingresa tu nombre."),
    ("form.invalid.nationality", "Por favor elige un país de la lista."),
    ("form.invalid.profession", "Por favor ingresa tu profesión."),
    ("form.invalid.yearsExperience", "Los años de experiencia deben ser mayores que cero."),
    ("form.invalid.province", "Por favor elige una provincia o territorio de la lista."),
    ("form.invalid.email", "Por favor ingresa un email válido."),
    ("error.title", "Error"),
    ("error.failed", "No se pudo generar la hoja de ruta: {message}"),
    ("error.retry", "Intentar de nuevo"),
    ("error.dismiss", "Cerrar"),
    ("results.title", "Tu Roadmap Profesional"),
    (
        "results.subtitle",
        "Basado en tu perfil como {profession} de {nationality} con {years} años de experiencia en {province}",
    ),
    ("results.professionalDifferences", "Diferencias Profesionales"),
    ("results.credentialValidation", "Validación de Credenciales"),
    ("results.recommendedTraining", "Entrenamiento Recomendado"),
    ("results.alternativeJobs", "Trabajos Alternativos"),
    ("results.checklist", "Lista de Verificación Interactiva"),
    ("results.intro.credentialValidation", "Para validar tu profesión en {province}, necesitarás:"),
    ("results.intro.recommendedTraining", "Para mejorar tus oportunidades laborales en Canadá:"),
    ("results.intro.alternativeJobs", "Mientras completas tu validación, considera estas opciones:"),
    ("results.editInfo", "Editar Información"),
    ("results.downloadPdf", "Descargar PDF"),
    ("results.sendEmail", "Enviar por Email"),
    ("results.generateAnother", "Generar otra hoja de ruta"),
    ("results.quit", "Salir"),
    ("notice.pdf", "Aquí se descargaría el PDF de tu hoja de ruta."),
    ("notice.email", "Tu hoja de ruta fue enviada a {email}"),
    ("notice.edit", "Aquí podrías editar tu información."),
    ("footer.tagline", "Construyendo caminos para el talento global."),
    ("province.ontario", "Ontario"),
    ("province.quebec", "Quebec"),
    ("province.alberta", "Alberta"),
    ("province.britishColumbia", "Columbia Británica"),
    ("province.manitoba", "Manitoba"),
    ("province.saskatchewan", "Saskatchewan"),
    ("province.novascotia", "Nueva Escocia"),
    ("province.newbrunswick", "Nuevo Brunswick"),
    ("province.newfoundland", "Terranova y Labrador"),
    ("province.pei", "Isla del Príncipe Eduardo"),
    ("province.northwest", "Territorios del Noroeste"),
    ("province.nunavut", "Nunavut"),
    ("province.yukon", "Yukón"),
    ("fallback.summary", "¡Bienvenido! Aquí está tu hoja de ruta personalizada."),
    ("fallback.professionalDifferences", "Los requisitos profesionales pueden variar entre países."),
    ("fallback.credentialValidation", "Contacta a los colegios profesionales correspondientes para validar tus credenciales."),
    ("fallback.recommendedTraining", "Considera cursos de desarrollo profesional en tu área."),
    ("fallback.alternativeJobs", "Explora puestos relacionados en tu industria."),
    ("fallback.checklist.1", "Investigar los requisitos profesionales"),
    ("fallback.checklist.2", "Reunir los documentos requeridos"),
    ("fallback.checklist.3", "Contactar a los colegios profesionales"),
    ("fallback.checklist.4", "Solicitar la evaluación de credenciales"),
    ("defaults.credentialStep", "Contacta al organismo regulador de tu profesión para iniciar la validación"),
    ("defaults.training", "Considera cursos de desarrollo profesional en tu área"),
    ("defaults.jobs.1", "Puestos relacionados en tu industria"),
    ("defaults.jobs.2", "Oportunidades de nivel inicial"),
    ("defaults.jobs.3", "Roles de consultoría"),
];

const FR: Table = &[
    ("welcome.headline", "Transformez votre expérience en carrière canadienne."),
    (
        "welcome.subtitle",
        "Recevez un plan clair, étape par étape, pour faire reconnaître votre profession et travailler dans votre domaine—rapidement.",
    ),
    ("welcome.start", "Commencer maintenant"),
    ("welcome.language", "Langue"),
    ("form.myNameIs", "Je m'appelle"),
    ("form.from", "de"),
    ("form.andImA", "et je suis"),
    ("form.with", "avec"),
    ("form.yearsOfExperience", "années d'expérience, vivant en"),
    ("form.myEmailIs", "Mon email est"),
    ("form.namePlaceholder", "Prénom, Nom"),
    ("form.countryPlaceholder", "Pays"),
    ("form.professionPlaceholder", "Profession"),
    ("form.yearsPlaceholder", "0"),
    ("form.provincePlaceholder", "Province"),
    ("form.emailPlaceholder", "email@exemple.com"),
    ("form.generate", "Générer ma Feuille de Route"),
    ("form.generating", "Génération de votre feuille de route..."),
    ("form.invalid.fullName", "Veuillez saisir votre nom."),
    ("form.invalid.nationality", "Veuillez choisir un pays dans la liste."),
    ("form.invalid.profession", "Veuillez saisir votre profession."),
    ("form.invalid.yearsExperience", "Les années d'expérience doivent être supérieures à zéro."),
    ("form.invalid.province", "Veuillez choisir une province ou un territoire dans la liste."),
    ("form.invalid.email", "Veuillez saisir une adresse email valide."),
    ("error.title", "Erreur"),
    ("error.failed", "Impossible de générer la feuille de route : {message}"),
    ("error.retry", "Réessayer"),
    ("error.dismiss", "Fermer"),
    ("results.title", "Votre Feuille de Route Professionnelle"),
    (
        "results.subtitle",
        "Selon votre profil de {profession} venant de {nationality} avec {years} années d'expérience en {province}",
    ),
    ("results.professionalDifferences", "Différences Professionnelles"),
    ("results.credentialValidation", "Validation des Diplômes"),
    ("results.recommendedTraining", "Formation Recommandée"),
    ("results.alternativeJobs", "Emplois Alternatifs"),
    ("results.checklist", "Liste de Contrôle Interactive"),
    ("results.intro.credentialValidation", "Pour faire reconnaître votre profession en {province}, il vous faudra :"),
    ("results.intro.recommendedTraining", "Pour améliorer vos perspectives d'emploi au Canada :"),
    ("results.intro.alternativeJobs", "Pendant votre démarche de reconnaissance, envisagez ces options :"),
    ("results.editInfo", "Modifier mes Informations"),
    ("results.downloadPdf", "Télécharger PDF"),
    ("results.sendEmail", "Envoyer par Email"),
    ("results.generateAnother", "Générer une autre feuille de route"),
    ("results.quit", "Quitter"),
    ("notice.pdf", "Le PDF de votre feuille de route serait téléchargé ici."),
    ("notice.email", "Votre feuille de route a été envoyée à {email}"),
    ("notice.edit", "Ceci vous permettrait de modifier vos informations."),
    ("footer.tagline", "Construire des voies pour les talents mondiaux."),
    ("province.ontario", "Ontario"),
    ("province.quebec", "Québec"),
    ("province.alberta", "Alberta"),
    ("province.britishColumbia", "Colombie-Britannique"),
    ("province.manitoba", "Manitoba"),
    ("province.saskatchewan", "Saskatchewan"),
    ("province.novascotia", "Nouvelle-Écosse"),
    ("province.newbrunswick", "Nouveau-Brunswick"),
    ("province.newfoundland", "Terre-Neuve-et-Labrador"),
    ("province.pei", "Île-du-Prince-Édouard"),
    ("province.northwest", "Territoires du Nord-Ouest"),
    ("province.nunavut", "Nunavut"),
    ("province.yukon", "Yukon"),
    ("fallback.summary", "Bienvenue ! Voici votre feuille de route personnalisée."),
    ("fallback.professionalDifferences", "Les exigences professionnelles peuvent varier d'un pays à l'autre."),
    ("fallback.credentialValidation", "Contactez les ordres professionnels concernés pour faire reconnaître vos diplômes."),
    ("fallback.recommendedTraining", "Envisagez des cours de perfectionnement professionnel dans votre domaine."),
    ("fallback.alternativeJobs", "Explorez des postes connexes dans votre secteur."),
    ("fallback.checklist.1", "Se renseigner sur les exigences professionnelles"),
    ("fallback.checklist.2", "Rassembler les documents requis"),
    ("fallback.checklist.3", "Contacter les ordres professionnels"),
    ("fallback.checklist.4", "Demander l'évaluation des diplômes"),
    ("defaults.credentialStep", "Contactez l'ordre professionnel concerné pour commencer la reconnaissance"),
    ("defaults.training", "Envisagez des cours de perfectionnement professionnel dans votre domaine"),
    ("defaults.jobs.1", "Postes connexes dans votre secteur"),
    ("defaults.jobs.2", "Postes de premier échelon"),
    ("defaults.jobs.3", "Missions de conseil"),
];

const PT: Table = &[
    ("welcome.headline", "Transforme sua experiência em uma carreira no Canadá."),
    (
        "welcome.subtitle",
        "Receba um plano claro, passo a passo, para validar sua profissão e começar a atuar na sua área—rápido.",
    ),
    ("welcome.start", "Começar agora"),
    ("welcome.language", "Idioma"),
    ("form.myNameIs", "Meu nome é"),
    ("form.from", "de"),
    ("form.andImA", "e sou"),
    ("form.with", "com"),
    ("form.yearsOfExperience", "anos de experiência, morando em"),
    ("form.myEmailIs", "Meu email é"),
    ("form.namePlaceholder", "Nome, Sobrenome"),
    ("form.countryPlaceholder", "País"),
    ("form.professionPlaceholder", "Profissão"),
    ("form.yearsPlaceholder", "0"),
    ("form.provincePlaceholder", "Província"),
    ("form.emailPlaceholder", "email@exemplo.com"),
    ("form.generate", "Gerar meu Roteiro"),
    ("form.generating", "Gerando seu roteiro..."),
    ("form.invalid.fullName", "Por favor, informe seu nome."),
    ("form.invalid.nationality", "Por favor, escolha um país da lista."),
    ("form.invalid.profession", "Por favor, informe sua profissão."),
    ("form.invalid.yearsExperience", "Os anos de experiência devem ser maiores que zero."),
    ("form.invalid.province", "Por favor, escolha uma província ou território da lista."),
    ("form.invalid.email", "Por favor, informe um email válido."),
    ("error.title", "Erro"),
    ("error.failed", "Não foi possível gerar o roteiro: {message}"),
    ("error.retry", "Tentar novamente"),
    ("error.dismiss", "Fechar"),
    ("results.title", "Seu Roteiro Profissional"),
    (
        "results.subtitle",
        "Com base no seu perfil de {profession} de {nationality} com {years} anos de experiência em {province}",
    ),
    ("results.professionalDifferences", "Diferenças Profissionais"),
    ("results.credentialValidation", "Validação de Credenciais"),
    ("results.recommendedTraining", "Treinamento Recomendado"),
    ("results.alternativeJobs", "Empregos Alternativos"),
    ("results.checklist", "Lista de Verificação Interativa"),
    ("results.intro.credentialValidation", "Para validar sua profissão em {province}, você precisará:"),
    ("results.intro.recommendedTraining", "Para melhorar suas oportunidades de trabalho no Canadá:"),
    ("results.intro.alternativeJobs", "Enquanto conclui sua validação, considere estas opções:"),
    ("results.editInfo", "Editar Informações"),
    ("results.downloadPdf", "Baixar PDF"),
    ("results.sendEmail", "Enviar por Email"),
    ("results.generateAnother", "Gerar outro roteiro"),
    ("results.quit", "Sair"),
    ("notice.pdf", "O PDF do seu roteiro seria baixado aqui."),
    ("notice.email", "Seu roteiro foi enviado para {email}"),
    ("notice.edit", "Aqui você poderia editar suas informações."),
    ("footer.tagline", "Construindo caminhos para talentos globais."),
    ("province.ontario", "Ontário"),
    ("province.quebec", "Quebec"),
    ("province.alberta", "Alberta"),
    ("province.britishColumbia", "Colúmbia Britânica"),
    ("province.manitoba", "Manitoba"),
    ("province.saskatchewan", "Saskatchewan"),
    ("province.novascotia", "Nova Escócia"),
    ("province.newbrunswick", "Novo Brunswick"),
    ("province.newfoundland", "Terra Nova e Labrador"),
    ("province.pei", "Ilha do Príncipe Eduardo"),
    ("province.northwest", "Territórios do Noroeste"),
    ("province.nunavut", "Nunavut"),
    ("province.yukon", "Yukon"),
    ("fallback.summary", "Bem-vindo! Aqui está seu roteiro personalizado."),
    ("fallback.professionalDifferences", "Os requisitos profissionais podem variar entre países."),
    ("fallback.credentialValidation", "Entre em contato com os órgãos profissionais competentes para validar suas credenciais."),
    ("fallback.recommendedTraining", "Considere cursos de desenvolvimento profissional na sua área."),
    ("fallback.alternativeJobs", "Explore cargos relacionados no seu setor."),
    ("fallback.checklist.1", "Pesquisar os requisitos profissionais"),
    ("fallback.checklist.2", "Reunir os documentos necessários"),
    ("fallback.checklist.3", "Contatar os órgãos profissionais"),
    ("fallback.checklist.4", "Solicitar a avaliação de credenciais"),
    ("defaults.credentialStep", "Entre em contato com o órgão regulador da sua profissão para iniciar a validação"),
    ("defaults.training", "Considere cursos de desenvolvimento profissional na sua área"),
    ("defaults.jobs.1", "Cargos relacionados no seu setor"),
    ("defaults.jobs.2", "Oportunidades de nível inicial"),
    ("defaults.jobs.3", "Funções de consultoria"),
];
