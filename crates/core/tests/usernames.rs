use std::collections::HashSet;
use vnuser_core::{
    convert_name_to_username, generate_unique_usernames, is_valid_domain, process_names_to_emails,
    remove_tone_marks, ProcessingOptions,
};

// ===== Username Tests =====

#[test]
fn test_full_name_to_username() {
    assert_eq!(convert_name_to_username("Pham Thanh Tung"), "tungpt");
    assert_eq!(convert_name_to_username("Nguyen Van An"), "annv");
}

#[test]
fn test_blank_name_to_username() {
    assert_eq!(convert_name_to_username(""), "");
    assert_eq!(convert_name_to_username("   "), "");
}

#[test]
fn test_duplicate_names_get_suffix() {
    let results = generate_unique_usernames(&["Tran Phuong Thao", "Ta Phuong Thao"]);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].original_name, "Tran Phuong Thao");
    assert_eq!(results[0].final_username, "thaotp");
    assert_eq!(results[1].original_name, "Ta Phuong Thao");
    assert_eq!(results[1].final_username, "thaotp1");
}

#[test]
fn test_names_to_emails() {
    let options = ProcessingOptions {
        domain: Some("acme.com".to_string()),
        include_emails: true,
    };
    let results = process_names_to_emails(&["Pham Thanh Tung"], &options);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].original_name, "Pham Thanh Tung");
    assert_eq!(results[0].final_username, "tungpt");
    assert_eq!(results[0].email.as_deref(), Some("tungpt@acme.com"));
}

#[test]
fn test_domain_validation() {
    assert!(is_valid_domain("company.com"));
    assert!(!is_valid_domain(""));
    assert!(!is_valid_domain("-bad-.com"));
}

// ===== Batch Invariant Tests =====

fn staff_names() -> Vec<String> {
    let given = ["An", "Thảo", "Tùng", "Lan", "Đức"];
    let family = ["Nguyễn", "Trần", "Tạ", "Phạm", "Tô"];
    let middle = ["Văn", "Thị", "Phương", "", "Thanh"];

    let mut names = Vec::new();
    for f in family {
        for m in middle {
            for g in given {
                names.push(format!("{f} {m} {g}"));
            }
        }
    }
    names.push(String::new());
    names.push("   ".to_string());
    names
}

#[test]
fn test_order_and_cardinality_preserved() {
    let names = staff_names();
    let results = generate_unique_usernames(&names);

    assert_eq!(results.len(), names.len());
    for (result, name) in results.iter().zip(&names) {
        assert_eq!(&result.original_name, name);
    }
}

#[test]
fn test_no_duplicate_final_usernames() {
    let results = generate_unique_usernames(&staff_names());

    let mut seen = HashSet::new();
    for result in results.iter().filter(|r| !r.final_username.is_empty()) {
        assert!(
            seen.insert(result.final_username.clone()),
            "duplicate username {}",
            result.final_username
        );
    }
    assert_eq!(results.iter().filter(|r| r.final_username.is_empty()).count(), 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    let names = staff_names();
    let options = ProcessingOptions::with_emails("acme.com");
    assert_eq!(
        process_names_to_emails(&names, &options),
        process_names_to_emails(&names, &options)
    );
}

#[test]
fn test_ascii_fixed_point() {
    for text in ["", "Pham Thanh Tung", "tungpt@acme.com", "A-Z a-z 0-9 !?~\t\n"] {
        assert_eq!(remove_tone_marks(text), text);
    }
}
