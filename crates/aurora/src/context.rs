//! The application context.

use aurora_board::{apply_move, Board, Card, DragPayload, Move, Stage, Transition};
use aurora_config::AuroraConfig;
use aurora_notify::{NewNotification, NotificationKind, NotificationStore};
use aurora_rbac::{Permission, PermissionEvaluator, RolePermissionMap};
use aurora_session::{Session, User};
use aurora_types::{EntityKind, EntityRef, NotificationId, UserId};
use tracing::info;

use crate::error::Result;

/// Everything the dashboard shares between screens.
///
/// Owns the session, the permission evaluator and the notification store.
/// Built once at bootstrap and passed around by reference.
///
/// # Example
///
/// ```
/// use aurora::{Aurora, Role, User, UserId};
///
/// let mut app = Aurora::default();
/// assert!(!app.can("view_financials"));
///
/// app.session_mut().login(User::new(UserId::new(2), "Ana", "ana@aurora.com.br", Role::Comprador));
/// assert!(app.can("view_financials"));
/// assert!(!app.can("manage_leads"));
/// ```
#[derive(Debug, Clone)]
pub struct Aurora {
    session: Session,
    evaluator: PermissionEvaluator,
    notifications: NotificationStore,
}

impl Aurora {
    /// Creates a context with no logged-in user.
    pub fn new(evaluator: PermissionEvaluator) -> Self {
        Self {
            session: Session::anonymous(),
            evaluator,
            notifications: NotificationStore::new(),
        }
    }

    /// Builds the context a configuration describes.
    ///
    /// Applies the permission overrides and, with `auto_login`, logs the
    /// configured demo user in.
    pub fn from_config(config: &AuroraConfig) -> Result<Self> {
        config.validate()?;
        let evaluator = PermissionEvaluator::new(config.permission_map()?);
        let mut app = Self::new(evaluator);

        if config.session.auto_login {
            let demo = &config.session.demo_user;
            let mut user = User::new(demo.user_id(), &demo.name, &demo.email, demo.role);
            user.department.clone_from(&demo.department);
            app.session.login(user);
        }

        info!(
            app = %config.app.name,
            overrides = config.permissions.overrides.len(),
            authenticated = app.session.is_authenticated(),
            "Aurora context ready"
        );

        Ok(app)
    }

    /// Replaces the session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Whether the current session holds a permission.
    ///
    /// Unknown identifiers are only granted to admins.
    pub fn can(&self, permission: &str) -> bool {
        self.evaluator.evaluate(self.session.current_role(), permission)
    }

    /// Like [`Aurora::can`], but returns a typed denial.
    pub fn require(&self, permission: &str) -> Result<()> {
        self.evaluator
            .require(self.session.current_role(), permission)?;
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn evaluator(&self) -> &PermissionEvaluator {
        &self.evaluator
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationStore {
        &mut self.notifications
    }

    /// Adds a notification to the store.
    pub fn notify(&mut self, notification: NewNotification) -> NotificationId {
        self.notifications.add(notification)
    }

    /// Submits a purchase request for approval.
    ///
    /// Requires `create_purchase_requests`. The approvers get an `info`
    /// notification pointing back at the request.
    pub fn submit_purchase_request(
        &mut self,
        request_id: &str,
        title: &str,
        approvers: Vec<UserId>,
    ) -> Result<NotificationId> {
        self.require(Permission::CreatePurchaseRequests.as_str())?;

        let requester = self
            .session
            .current_user()
            .map_or("Usuário", |user| user.name.as_str());
        let notification = NewNotification::new(
            "Nova solicitação de compra",
            format!("{requester} enviou {request_id} ({title}) para aprovação"),
            NotificationKind::Info,
            approvers,
        )
        .with_reference(EntityRef::new(EntityKind::PurchaseRequest, request_id));

        info!(request_id, "Purchase request submitted");
        Ok(self.notify(notification))
    }

    /// Handles a drop on a Kanban board.
    ///
    /// Parses the drag payload, checks the permission the target column
    /// requires and returns the new board. The given board is never modified.
    pub fn move_card<C: Card>(
        &self,
        board: &Board<C>,
        payload: &str,
        target: C::Stage,
    ) -> Result<(Board<C>, Transition<C::Stage>)> {
        let payload = DragPayload::parse(payload)?;
        self.require(target.required_permission().as_str())?;

        let (board, transition) = apply_move(board, &Move::new(payload.into_card_id(), target))?;
        if transition.changed() {
            info!(
                board = <C::Stage as Stage>::BOARD,
                card_id = %transition.card_id,
                from = %transition.from,
                to = %transition.to,
                "Card moved"
            );
        }
        Ok((board, transition))
    }
}

impl Default for Aurora {
    /// Built-in permissions, nobody logged in.
    fn default() -> Self {
        Self::new(PermissionEvaluator::new(RolePermissionMap::builtin()))
    }
}
