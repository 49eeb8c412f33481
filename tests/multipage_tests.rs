mod common;

use common::fixtures::long_record;
use common::pdf_assertions::GeneratedPdf;
use common::{TestResult, init_logging};
use orderslip::render_receipt;

#[test]
fn test_long_item_list_paginates() -> TestResult {
    init_logging();
    let rendered = render_receipt(&long_record(60))?;
    let pdf = GeneratedPdf::from_bytes(rendered.bytes)?;
    assert!(pdf.page_count() >= 2, "pages: {}", pdf.page_count());

    // First and last items land on different pages.
    assert!(pdf.page_text(1)?.contains("Menu Item 0"));
    let last_text = pdf.page_text(pdf.page_count() as u32)?;
    assert!(pdf.all_text()?.contains("Menu Item 59"));
    assert!(last_text.contains("Total paid"));
    Ok(())
}

#[test]
fn test_table_header_repeats_after_page_break() -> TestResult {
    let rendered = render_receipt(&long_record(60))?;
    let pdf = GeneratedPdf::from_bytes(rendered.bytes)?;
    for page in 1..=2 {
        let text = pdf.page_text(page)?;
        assert!(text.contains("Customizations"), "page {page}: {text}");
        assert!(text.contains("Unit Price"), "page {page}: {text}");
    }
    Ok(())
}

#[test]
fn test_every_page_is_stamped_with_its_number() -> TestResult {
    let rendered = render_receipt(&long_record(60))?;
    let pdf = GeneratedPdf::from_bytes(rendered.bytes)?;
    let total = pdf.page_count();
    for page in 1..=total {
        let text = pdf.page_text(page as u32)?;
        assert!(
            text.contains(&format!("Page {page} of {total}")),
            "page {page}: {text}"
        );
        assert!(text.contains("Thank you for your order!"));
    }
    Ok(())
}

#[test]
fn test_single_item_stays_on_one_page() -> TestResult {
    let rendered = render_receipt(&long_record(1))?;
    let pdf = GeneratedPdf::from_bytes(rendered.bytes)?;
    assert_eq!(pdf.page_count(), 1);
    Ok(())
}
