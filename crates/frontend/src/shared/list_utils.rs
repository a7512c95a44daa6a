/// Универсальные утилиты для работы со списками (поиск, постраничный вывод, UI компоненты)
use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу.
    /// Запрос уже приведён к нижнему регистру.
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Фильтрует список по поисковому запросу, сохраняя исходный порядок.
/// Пустой запрос возвращает список без изменений.
pub fn filter_list<'a, T, I>(items: I, filter: &str) -> Vec<T>
where
    T: Searchable + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let filter_lower = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| filter_lower.is_empty() || item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Окно `[page * page_size, page * page_size + page_size)` поверх `rows`.
///
/// Страница за пределами данных даёт пустой срез: так бывает, когда список
/// уменьшился, а номер страницы остался прежним.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Количество страниц для `total_count` записей
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

fn lowercase_keeps_offsets(text: &str) -> bool {
    text.chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8())
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Смещения в text_lower годятся для text, только если каждый символ
    // сохраняет длину в байтах после to_lowercase
    if filter_lower.is_empty()
        || !lowercase_keeps_offsets(text)
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки. Каждое изменение сразу уходит в `on_change`.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search items...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div style="position: relative; display: flex; align-items: center; margin-bottom: 20px;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 100%; padding: 8px 32px 8px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if is_filter_active() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| on_change.run(String::new())
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
