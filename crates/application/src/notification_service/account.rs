use sedapal_domain::UserRole;

use super::templates::{self, Accent, escape_html, render};
use super::*;

impl NotificationService {
    /// Sends login credentials for a newly created account.
    pub async fn send_credentials(&self, notice: &CredentialsNotice) -> AppResult<()> {
        let to = recipients([Some(notice.email.as_str())])?;
        let full_name = format!("{} {}", notice.given_name, notice.family_name);
        let login_url = self.settings.login_url();

        let html = render(
            templates::CREDENTIALS_HTML,
            &[
                ("full_name", &escape_html(&full_name)),
                ("email", &escape_html(&notice.email)),
                ("password", &escape_html(&notice.password)),
                ("role", notice.role.display_name()),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::CREDENTIALS_TEXT,
            &[
                ("full_name", &full_name),
                ("email", &notice.email),
                ("password", &notice.password),
                ("role", notice.role.display_name()),
                ("login_url", &login_url),
            ],
        );

        let email = self.compose(
            to,
            credentials_subject(notice.role).to_owned(),
            (Accent::Blue, "🔐 Credenciales de Acceso"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }

    /// Sends credentials for a new user together with their first activity.
    pub async fn send_credentials_with_activity(
        &self,
        notice: &CredentialsWithActivityNotice,
    ) -> AppResult<()> {
        let to = recipients([Some(notice.email.as_str())])?;
        let full_name = format!("{} {}", notice.given_name, notice.family_name);
        let login_url = self.settings.login_url();
        let activity = &notice.activity;
        let quarter = activity.quarter.to_string();
        let due_date = text_or(&activity.due_date, "No especificada");

        let details_html = render(
            templates::ACTIVITY_DETAILS_HTML,
            &[
                ("activity_name", &escape_html(&activity.activity_name)),
                ("system", &escape_html(&activity.system_abbreviation)),
                ("team", &escape_html(&activity.team_name)),
                ("quarter", &quarter),
                ("due_date", &escape_html(due_date)),
            ],
        );
        let details_text = render(
            templates::ACTIVITY_DETAILS_TEXT,
            &[
                ("activity_name", &activity.activity_name),
                ("system", &activity.system_abbreviation),
                ("team", &activity.team_name),
                ("quarter", &quarter),
                ("due_date", due_date),
            ],
        );

        let html = render(
            templates::CREDENTIALS_WITH_ACTIVITY_HTML,
            &[
                ("full_name", &escape_html(&full_name)),
                ("email", &escape_html(&notice.email)),
                ("password", &escape_html(&notice.password)),
                ("details", &details_html),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::CREDENTIALS_WITH_ACTIVITY_TEXT,
            &[
                ("full_name", &full_name),
                ("email", &notice.email),
                ("password", &notice.password),
                ("details", &details_text),
                ("login_url", &login_url),
            ],
        );

        let email = self.compose(
            to,
            "🔐 Credenciales de Acceso y Nueva Actividad - Sistema SEDAPAL".to_owned(),
            (Accent::Blue, "🔐 Bienvenido al Sistema SEDAPAL"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }

    /// Sends credentials plus division and team membership.
    pub async fn send_user_created(&self, notice: &UserCreatedNotice) -> AppResult<()> {
        let to = recipients([notice.email.as_deref()])?;
        let login_url = self.settings.login_url();
        let user_name = text_or(&notice.user_name, "");
        let email_address = text_or(&notice.email, "");
        let password = text_or(&notice.password, "");
        let division = text_or(&notice.division_name, "N/A");
        let team = text_or(&notice.team_name, "N/A");

        let html = render(
            templates::USER_CREATED_HTML,
            &[
                ("user_name", &escape_html(user_name)),
                ("email", &escape_html(email_address)),
                ("password", &escape_html(password)),
                ("division", &escape_html(division)),
                ("team", &escape_html(team)),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::USER_CREATED_TEXT,
            &[
                ("user_name", user_name),
                ("email", email_address),
                ("password", password),
                ("division", division),
                ("team", team),
                ("login_url", &login_url),
            ],
        );

        let email = self.compose(
            to,
            "👤 Usuario creado - Accesos y pertenencia".to_owned(),
            (Accent::Blue, "👤 Usuario creado"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }

    /// Tells an administrator that a system was assigned to them.
    pub async fn send_system_assigned(&self, notice: &SystemAssignedNotice) -> AppResult<()> {
        let to = recipients([notice.email.as_deref()])?;
        let login_url = self.settings.login_url();
        let admin_name = text_or(&notice.admin_name, "");
        let abbreviation = text_or(&notice.system_abbreviation, "N/A");
        let system_name = text_or(&notice.system_name, "Sistema");

        let html = render(
            templates::SYSTEM_ASSIGNED_HTML,
            &[
                ("admin_name", &escape_html(admin_name)),
                ("system_abbreviation", &escape_html(abbreviation)),
                ("system_name", &escape_html(system_name)),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::SYSTEM_ASSIGNED_TEXT,
            &[
                ("admin_name", admin_name),
                ("system_abbreviation", abbreviation),
                ("system_name", system_name),
                ("login_url", &login_url),
            ],
        );

        let subject = format!(
            "🛠️ Sistema asignado: {}",
            notice.system_abbreviation.as_deref().unwrap_or_default()
        );
        let email = self.compose(
            to,
            subject,
            (Accent::Blue, "🛠️ Asignación de Sistema"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }
}

/// Subject line for a credentials email, by granted role.
pub(super) fn credentials_subject(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "🔐 Acceso como Administrador - Sistema SEDAPAL",
        UserRole::User => "🔐 Acceso como Usuario - Sistema SEDAPAL",
        UserRole::SuperAdmin => "🔐 Acceso al Sistema SEDAPAL",
    }
}
