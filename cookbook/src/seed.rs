//! Recipes present at startup before any user additions

use crate::domain::{Category, Ingredient, NewRecipe};

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// The seed recipes, in the order they receive ids
pub fn recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            title: "Омлет с овощами".to_string(),
            category: Category::Breakfast,
            preparation_minutes: 15,
            ingredients: vec![
                Ingredient::new("Яйца", 3.0, "шт"),
                Ingredient::new("Помидоры", 1.0, "шт"),
                Ingredient::new("Лук", 0.5, "шт"),
                Ingredient::new("Масло растительное", 1.0, "ст.л"),
            ],
            steps: steps(&[
                "Взбить яйца",
                "Нарезать овощи мелкими кубиками",
                "Взбить яйца с солью и перцем",
                "Обжарить лук до прозрачности",
                "Добавить помидоры, обжарить 2 минуты",
            ]),
            image: None,
        },
        NewRecipe {
            title: "Салат Цезарь".to_string(),
            category: Category::Lunch,
            preparation_minutes: 20,
            ingredients: vec![
                Ingredient::new("Куриная грудка", 200.0, "г"),
                Ingredient::new("Салат Айсберг", 100.0, "г"),
                Ingredient::new("Сухарики", 50.0, "г"),
                Ingredient::new("Сыр Пармезан", 30.0, "г"),
                Ingredient::new("Соус Цезарь", 2.0, "ст.л"),
            ],
            steps: steps(&[
                "Обжарить куриную грудку до готовности",
                "Порвать салат руками на крупные куски",
                "Нарезать курицу ломтиками",
                "Смешать все ингредиенты в большой миске",
                "Заправить соусом и посыпать пармезаном",
            ]),
            image: None,
        },
        NewRecipe {
            title: "Паста Карбонара".to_string(),
            category: Category::Dinner,
            preparation_minutes: 30,
            ingredients: vec![
                Ingredient::new("Спагетти", 200.0, "г"),
                Ingredient::new("Бекон", 150.0, "г"),
                Ingredient::new("Яйца", 2.0, "шт"),
                Ingredient::new("Сыр Пармезан", 50.0, "г"),
                Ingredient::new("Чеснок", 2.0, "зубчика"),
            ],
            steps: steps(&[
                "Отварить пасту согласно инструкции на упаковке",
                "Обжарить бекон до хрустящей корочки",
                "Взбить яйца с тертым пармезаном и черным перцем",
                "Добавить к яйцам горячую пасту и бекон, быстро перемешать",
                "Подавать сразу же, посыпав дополнительно пармезаном",
            ]),
            image: None,
        },
    ]
}
