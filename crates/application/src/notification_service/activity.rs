use super::templates::{self, Accent, escape_html, render};
use super::*;

/// Placeholder-filled deliverable fields, shared by the review and approval emails.
struct DeliverableFields<'a> {
    activity_name: &'a str,
    deliverable: &'a str,
    system: &'a str,
    team: &'a str,
    due_date: &'a str,
}

impl DeliverableFields<'_> {
    fn html(&self) -> String {
        render(
            templates::DELIVERABLE_DETAILS_HTML,
            &[
                ("activity_name", &escape_html(self.activity_name)),
                ("deliverable", &escape_html(self.deliverable)),
                ("system", &escape_html(self.system)),
                ("team", &escape_html(self.team)),
                ("due_date", &escape_html(self.due_date)),
            ],
        )
    }

    fn text(&self) -> String {
        render(
            templates::DELIVERABLE_DETAILS_TEXT,
            &[
                ("activity_name", self.activity_name),
                ("deliverable", self.deliverable),
                ("system", self.system),
                ("team", self.team),
                ("due_date", self.due_date),
            ],
        )
    }
}

impl NotificationService {
    /// Tells an existing user about a newly assigned activity.
    pub async fn send_activity_assigned(&self, notice: &ActivityAssignedNotice) -> AppResult<()> {
        let to = recipients([notice.email.as_deref()])?;
        let login_url = self.settings.login_url();
        let user_name = text_or(&notice.user_name, "");
        let activity_name = text_or(&notice.activity_name, "");
        let system = text_or(&notice.system_abbreviation, "N/A");
        let team = text_or(&notice.team_name, "N/A");
        let due_date = text_or(&notice.due_date, "No especificada");
        let quarter = notice.quarter.to_string();

        let details_html = render(
            templates::ACTIVITY_DETAILS_HTML,
            &[
                ("activity_name", &escape_html(activity_name)),
                ("system", &escape_html(system)),
                ("team", &escape_html(team)),
                ("quarter", &quarter),
                ("due_date", &escape_html(due_date)),
            ],
        );
        let details_text = render(
            templates::ACTIVITY_DETAILS_TEXT,
            &[
                ("activity_name", activity_name),
                ("system", system),
                ("team", team),
                ("quarter", &quarter),
                ("due_date", due_date),
            ],
        );

        let html = render(
            templates::ACTIVITY_HTML,
            &[
                ("user_name", &escape_html(user_name)),
                ("details", &details_html),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::ACTIVITY_TEXT,
            &[
                ("user_name", user_name),
                ("details", &details_text),
                ("login_url", &login_url),
            ],
        );

        let email = self.compose(
            to,
            "📝 Nueva Actividad Asignada - Sistema SEDAPAL".to_owned(),
            (Accent::Blue, "📝 Nueva Actividad Asignada"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }

    /// Asks an administrator to review a deliverable the user marked as done.
    pub async fn send_deliverable_flagged(
        &self,
        notice: &DeliverableFlaggedNotice,
    ) -> AppResult<()> {
        let to = recipients([notice.admin_email.as_deref()])?;
        let login_url = self.settings.login_url();
        let user_name = text_or(&notice.user_name, "");
        let user_email = text_or(&notice.user_email, "");
        let fields = DeliverableFields {
            activity_name: text_or(&notice.activity_name, ""),
            deliverable: text_or(&notice.deliverable_name, "No especificado"),
            system: text_or(&notice.system_abbreviation, "N/A"),
            team: text_or(&notice.team_name, "N/A"),
            due_date: text_or(&notice.due_date, "No especificada"),
        };

        let html = render(
            templates::DELIVERABLE_FLAGGED_HTML,
            &[
                ("user_name", &escape_html(user_name)),
                ("user_email", &escape_html(user_email)),
                ("details", &fields.html()),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::DELIVERABLE_FLAGGED_TEXT,
            &[
                ("user_name", user_name),
                ("user_email", user_email),
                ("details", &fields.text()),
                ("login_url", &login_url),
            ],
        );

        let email = self.compose(
            to,
            format!("🕓 Revisión requerida: {}", fields.activity_name),
            (Accent::Blue, "🕓 Revisión requerida"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }

    /// Announces an approved deliverable to users and super administrators.
    ///
    /// Both lists are concatenated in order without removing duplicates.
    pub async fn send_deliverable_approved(
        &self,
        notice: &DeliverableApprovedNotice,
    ) -> AppResult<()> {
        let to = recipients(
            notice
                .user_recipients
                .iter()
                .chain(notice.superadmin_recipients.iter())
                .map(|address| Some(address.as_str())),
        )?;
        let login_url = self.settings.login_url();
        let fields = DeliverableFields {
            activity_name: text_or(&notice.activity_name, ""),
            deliverable: text_or(&notice.deliverable_name, "No especificado"),
            system: text_or(&notice.system_abbreviation, "N/A"),
            team: text_or(&notice.team_name, "N/A"),
            due_date: text_or(&notice.due_date, "No especificada"),
        };

        let html = render(
            templates::DELIVERABLE_APPROVED_HTML,
            &[
                ("details", &fields.html()),
                ("login_url", &escape_html(&login_url)),
            ],
        );
        let text = render(
            templates::DELIVERABLE_APPROVED_TEXT,
            &[("details", &fields.text()), ("login_url", &login_url)],
        );

        let email = self.compose(
            to,
            format!("✅ Actividad validada: {}", fields.activity_name),
            (Accent::Green, "✅ Actividad validada"),
            &html,
            &text,
        );
        self.dispatch(email).await
    }
}
