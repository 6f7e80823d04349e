// Name pools for the seed generator. Each row pairs the male and female form
// so a generated person keeps one grammatical gender throughout.

/// (male, female) surname forms.
pub const SURNAMES: &[(&str, &str)] = &[
  ("Иванов", "Иванова"),
  ("Смирнов", "Смирнова"),
  ("Кузнецов", "Кузнецова"),
  ("Попов", "Попова"),
  ("Васильев", "Васильева"),
  ("Петров", "Петрова"),
  ("Соколов", "Соколова"),
  ("Михайлов", "Михайлова"),
  ("Новиков", "Новикова"),
  ("Фёдоров", "Фёдорова"),
  ("Морозов", "Морозова"),
  ("Волков", "Волкова"),
  ("Алексеев", "Алексеева"),
  ("Лебедев", "Лебедева"),
  ("Семёнов", "Семёнова"),
  ("Егоров", "Егорова"),
  ("Павлов", "Павлова"),
  ("Козлов", "Козлова"),
  ("Степанов", "Степанова"),
  ("Никитин", "Никитина"),
  ("Орлов", "Орлова"),
  ("Андреев", "Андреева"),
  ("Макаров", "Макарова"),
  ("Захаров", "Захарова"),
  ("Зайцев", "Зайцева"),
  ("Соловьёв", "Соловьёва"),
  ("Борисов", "Борисова"),
  ("Яковлев", "Яковлева"),
  ("Григорьев", "Григорьева"),
  ("Романов", "Романова"),
  ("Белов", "Белова"),
  ("Тарасов", "Тарасова"),
  ("Комаров", "Комарова"),
  ("Киселёв", "Киселёва"),
  ("Ковалевский", "Ковалевская"),
  ("Жуковский", "Жуковская"),
];

pub const MALE_NAMES: &[&str] = &[
  "Александр", "Алексей", "Андрей", "Антон", "Артём", "Борис", "Вадим",
  "Василий", "Виктор", "Владимир", "Глеб", "Григорий", "Дмитрий", "Егор",
  "Иван", "Игорь", "Илья", "Кирилл", "Константин", "Максим", "Михаил",
  "Никита", "Николай", "Олег", "Павел", "Пётр", "Роман", "Сергей",
  "Степан", "Тимофей", "Фёдор", "Юрий", "Ярослав",
];

pub const FEMALE_NAMES: &[&str] = &[
  "Александра", "Алина", "Анастасия", "Анна", "Валентина", "Валерия",
  "Вера", "Виктория", "Галина", "Дарья", "Екатерина", "Елена", "Елизавета",
  "Зоя", "Ирина", "Ксения", "Любовь", "Людмила", "Маргарита", "Мария",
  "Надежда", "Наталья", "Нина", "Ольга", "Полина", "Светлана", "София",
  "Татьяна", "Ульяна", "Юлия",
];

/// (male, female) patronymic forms, derived from a father's name.
pub const PATRONYMICS: &[(&str, &str)] = &[
  ("Александрович", "Александровна"),
  ("Алексеевич", "Алексеевна"),
  ("Андреевич", "Андреевна"),
  ("Борисович", "Борисовна"),
  ("Васильевич", "Васильевна"),
  ("Викторович", "Викторовна"),
  ("Владимирович", "Владимировна"),
  ("Григорьевич", "Григорьевна"),
  ("Дмитриевич", "Дмитриевна"),
  ("Евгеньевич", "Евгеньевна"),
  ("Иванович", "Ивановна"),
  ("Игоревич", "Игоревна"),
  ("Ильич", "Ильинична"),
  ("Константинович", "Константиновна"),
  ("Максимович", "Максимовна"),
  ("Михайлович", "Михайловна"),
  ("Николаевич", "Николаевна"),
  ("Олегович", "Олеговна"),
  ("Павлович", "Павловна"),
  ("Петрович", "Петровна"),
  ("Романович", "Романовна"),
  ("Сергеевич", "Сергеевна"),
  ("Степанович", "Степановна"),
  ("Фёдорович", "Фёдоровна"),
  ("Юрьевич", "Юрьевна"),
];
