use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::pricing::PriceTag;
use crate::shared::components::ui::Badge;
use leptos::prelude::*;

fn price_tag_class(large: bool, discounted: bool) -> String {
    let mut class = String::from("price-tag");
    if large {
        class.push_str(" price-tag--large");
    }
    if discounted {
        class.push_str(" price-tag--discount");
    }
    class
}

/// Цена товара: текущая, зачёркнутая исходная и бейдж при скидке,
/// рассрочка для цен без суффикса
#[component]
pub fn PriceTagView(product: Product, #[prop(optional)] large: bool) -> impl IntoView {
    let tag = PriceTag::for_product(&product);
    let class = price_tag_class(large, tag.has_discount());
    let percent = tag.discount_percent;

    view! {
        <div class=class>
            {tag.original.map(|original| view! {
                <span class="price-tag__original">{original}</span>
            })}
            <div class="price-tag__row">
                <span class="price-tag__current">{tag.current}</span>
                {percent.map(|p| view! {
                    <Badge variant="discount">{format!("-{}%", p)}</Badge>
                })}
            </div>
            {tag.installments.map(|text| view! {
                <span class="price-tag__installments">{text}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_tag_class_marks_discount() {
        assert_eq!(price_tag_class(false, false), "price-tag");
        assert_eq!(price_tag_class(true, true), "price-tag price-tag--large price-tag--discount");
        assert_eq!(price_tag_class(false, true), "price-tag price-tag--discount");
    }
}
