//! Shop API authentication documents.

use super::builder::{error_result, QueryBuilder};
use super::document::Document;
use super::selection::SelectionSet;

fn current_user(set: &mut SelectionSet) {
    set.on("CurrentUser", |user| {
        user.fields(["id", "identifier"]).object("channels", |channels| {
            channels.fields(["id", "token", "code", "permissions"]);
        });
    });
}

fn success(set: &mut SelectionSet) {
    set.on("Success", |success| {
        success.field("success");
    });
}

impl QueryBuilder<'_> {
    /// Builds `mutation login($username: String!, $password: String!, $rememberMe: Boolean)`.
    ///
    /// On success the server returns the session token in the auth token
    /// response header, which [`HttpClient`](crate::clients::HttpClient)
    /// captures for later requests.
    #[must_use]
    pub fn login(&self) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args(
            "login",
            "username: $username, password: $password, rememberMe: $rememberMe",
            |result| {
                current_user(result);
                error_result(result);
            },
        );
        Document::mutation("login")
            .variable("username", "String!")
            .variable("password", "String!")
            .variable("rememberMe", "Boolean")
            .selection(root)
            .to_string()
    }

    /// Builds `mutation logout`.
    #[must_use]
    pub fn logout(&self) -> String {
        let mut root = SelectionSet::new();
        root.object("logout", |result| {
            result.field("success");
        });
        Document::mutation("logout").selection(root).to_string()
    }

    /// Builds `mutation registerCustomerAccount($input: RegisterCustomerInput!)`.
    #[must_use]
    pub fn register_customer_account(&self) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("registerCustomerAccount", "input: $input", |result| {
            success(result);
            error_result(result);
        });
        Document::mutation("registerCustomerAccount")
            .variable("input", "RegisterCustomerInput!")
            .selection(root)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::custom_fields::{FieldDeclaration, FieldRegistry};
    use crate::query::QueryBuilder;

    #[test]
    fn test_login_document() {
        let registry = FieldRegistry::new();
        let document = QueryBuilder::new(&registry).login();

        assert!(document.starts_with(
            "mutation login($username: String!, $password: String!, $rememberMe: Boolean) {\n"
        ));
        assert!(document.contains("    ... on CurrentUser {\n      id\n      identifier\n"));
        assert!(document.contains("    ... on ErrorResult {\n"));
    }

    #[test]
    fn test_logout_document() {
        let registry = FieldRegistry::new();
        assert_eq!(
            QueryBuilder::new(&registry).logout(),
            "mutation logout {\n  logout {\n    success\n  }\n}\n"
        );
    }

    #[test]
    fn test_auth_documents_ignore_registry() {
        let registry = FieldRegistry::new();
        registry.add(FieldDeclaration::scalar("marketingOptIn", ["Customer", "CurrentUser"]));
        let builder = QueryBuilder::new(&registry);

        let register = builder.register_customer_account();
        assert!(register
            .starts_with("mutation registerCustomerAccount($input: RegisterCustomerInput!) {\n"));
        assert!(register.contains("... on Success {\n      success\n    }"));
        assert!(!register.contains("marketingOptIn"));
        assert!(!builder.login().contains("marketingOptIn"));
    }
}
