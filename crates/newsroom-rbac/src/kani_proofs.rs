//! Kani bounded model checking proofs for the hard access rules.
//!
//! - Primary admin protection: no caller can delete user id 1
//! - Category integrity: no caller can delete a category with articles
//! - Management separation: only admins manage users

use crate::{enforcement::PolicyEnforcer, policy::AccessPolicy};
use newsroom_types::{Category, CategoryId, PRIMARY_ADMIN_ID, Role, User, UserId};

fn any_role() -> Role {
    let tag: u8 = kani::any();
    kani::assume(tag < 3);
    match tag {
        0 => Role::Author,
        1 => Role::Editor,
        _ => Role::Admin,
    }
}

fn any_user() -> User {
    let id: u64 = kani::any();
    User::new(UserId::new(id), "caller", "caller@example.com", any_role())
}

/// Verifies that the primary admin is never deletable.
///
/// **Property**: for every caller role and id, both the policy and the
/// enforcer reject deletion of `PRIMARY_ADMIN_ID`.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_primary_admin_protected() {
    let caller = any_user();
    let primary = User::new(PRIMARY_ADMIN_ID, "primary", "root@example.com", Role::Admin);

    assert!(!AccessPolicy::can_delete_user(&caller, &primary));

    let enforcer = PolicyEnforcer::new().without_audit();
    assert!(enforcer.enforce_delete_user(&caller, &primary).is_err());
}

/// Verifies that categories with articles are never deletable.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_category_in_use_protected() {
    let caller = any_user();
    let count: u32 = kani::any();
    kani::assume(count > 0);

    let category = Category::new(CategoryId::new(1), "c", "", "bg-blue-500").with_article_count(count);

    assert!(!AccessPolicy::can_delete_category(&category));

    let enforcer = PolicyEnforcer::new().without_audit();
    assert!(enforcer.enforce_delete_category(&caller, &category).is_err());
}

/// Verifies that user management is admin-only.
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_user_management_admin_only() {
    let caller = any_user();
    assert_eq!(AccessPolicy::can_manage_users(&caller), caller.role == Role::Admin);
}
